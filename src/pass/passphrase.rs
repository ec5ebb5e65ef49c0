//! Word-based passphrase generation.

use zeroize::Zeroizing;

use super::charset::Exclusion;
use super::config::PassphraseConfig;
use super::generate::Generator;
use crate::error::{GenError, Result};
use crate::rand::EntropySource;

/// Upper bound (exclusive) of the trailing number.
const NUMBER_BOUND: usize = 1000;

impl<S: EntropySource> Generator<'_, S> {
    /// Included words plus random list words, shuffled and joined, with an
    /// optional trailing number.
    pub fn passphrase(&mut self, cfg: &PassphraseConfig) -> Result<String> {
        let mut words: Zeroizing<Vec<String>> = Zeroizing::new(Vec::new());

        for word in &cfg.include {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            let word = cfg.exclude.filter(&style(word, cfg.capitalize));
            if !word.is_empty() {
                words.push(word);
            }
        }

        // Never drop a caller's word to honour a smaller count
        let total = cfg.words.max(words.len());

        if words.len() < total {
            let eligible: Vec<&str> = self
                .words
                .words()
                .iter()
                .copied()
                .filter(|w| cfg.exclude.allows(&style(w, cfg.capitalize)))
                .collect();
            if eligible.is_empty() {
                return Err(GenError::NoWordsAvailable);
            }
            while words.len() < total {
                let word = self.rng.choose(&eligible)?;
                words.push(style(word, cfg.capitalize));
            }
        }

        self.rng.shuffle(words.as_mut_slice())?;

        let number = if cfg.add_number {
            Some(self.trailing_number(&cfg.exclude)?)
        } else {
            None
        };

        let separator = cfg.separator.as_str();
        let mut phrase = words.join(separator);
        if let Some(number) = number {
            phrase.push_str(separator);
            phrase.push_str(&number.to_string());
        }
        Ok(phrase)
    }

    /// Uniform over `[0, 1000)` restricted to numbers whose digits survive
    /// the exclusions.
    fn trailing_number(&mut self, exclude: &Exclusion) -> Result<usize> {
        if exclude.is_empty() {
            return self.rng.uniform(NUMBER_BOUND);
        }
        let allowed: Vec<usize> = (0..NUMBER_BOUND)
            .filter(|n| exclude.allows(&n.to_string()))
            .collect();
        if allowed.is_empty() {
            return Err(GenError::NoCharactersAvailable);
        }
        Ok(*self.rng.choose(&allowed)?)
    }
}

/// Apply capitalization: only the first character is forced upper.
fn style(word: &str, capitalize: bool) -> String {
    if !capitalize {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
