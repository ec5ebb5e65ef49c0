//! Random and segmented password generation.

use zeroize::Zeroizing;

use super::charset;
use super::config::{RandomConfig, SegmentConfig};
use super::words::WordList;
use crate::error::Result;
use crate::rand::{EntropySource, OsEntropy, SecureRandom};

/// Turns configurations into secrets.
///
/// Owns the random source and borrows the word table; holds no other state,
/// so every call is an independent draw.
pub struct Generator<'w, S = OsEntropy> {
    pub(super) rng: SecureRandom<S>,
    pub(super) words: WordList<'w>,
}

impl Generator<'static, OsEntropy> {
    pub fn new() -> Self {
        Self {
            rng: SecureRandom::new(),
            words: WordList::builtin(),
        }
    }
}

impl Default for Generator<'static, OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w, S: EntropySource> Generator<'w, S> {
    pub fn with_source(source: S, words: WordList<'w>) -> Self {
        Self {
            rng: SecureRandom::with_source(source),
            words,
        }
    }

    /// Fixed-length password with at least one character of every enabled
    /// class, as long as `length` allows it.
    pub fn random(&mut self, cfg: &RandomConfig) -> Result<String> {
        let charset = charset::build(cfg.classes(), &cfg.exclude)?;
        let mut password = Zeroizing::new(vec![0u8; cfg.length]);

        // One guaranteed slot per class, in class order
        let mut pos = 0;
        for pool in charset.pools.iter().take(cfg.length) {
            password[pos] = *self.rng.choose(pool.as_slice())?;
            pos += 1;
        }

        for slot in password[pos..].iter_mut() {
            *slot = *self.rng.choose(charset.full.as_slice())?;
        }

        // Seeded slots sit at the front until shuffled
        self.rng.shuffle(password.as_mut_slice())?;

        Ok(password.iter().map(|&b| b as char).collect())
    }

    /// `segments` runs of `seg_length` characters joined by the separator.
    pub fn segmented(&mut self, cfg: &SegmentConfig) -> Result<String> {
        let charset = charset::build(cfg.classes(), &cfg.exclude)?;
        let mut out = Zeroizing::new(String::new());
        // Sized up front so the secret is never copied by a regrow
        let capacity = cfg
            .seg_length
            .checked_add(1)
            .and_then(|n| n.checked_mul(cfg.segments));
        if let Some(capacity) = capacity {
            let _ = out.try_reserve_exact(capacity);
        }

        for i in 0..cfg.segments {
            if i > 0 {
                out.push_str(cfg.separator.as_str());
            }
            for _ in 0..cfg.seg_length {
                out.push(*self.rng.choose(charset.full.as_slice())? as char);
            }
        }

        Ok(std::mem::take(&mut *out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use crate::pass::charset::{CharClass, Exclusion};
    use crate::pass::config::Separator;
    use crate::rand::tests::{FailAfter, Script};

    fn scripted(values: &[u64]) -> Generator<'static, Script> {
        Generator::with_source(Script::new(values), WordList::builtin())
    }

    #[test]
    fn random_has_requested_length() {
        let mut generator = Generator::new();
        for length in [1, 2, 4, 16, 64, 200] {
            let cfg = RandomConfig {
                length,
                ..RandomConfig::default()
            };
            assert_eq!(generator.random(&cfg).unwrap().len(), length);
        }
    }

    #[test]
    fn random_covers_every_enabled_class() {
        let mut generator = Generator::new();
        let cfg = RandomConfig {
            length: 4,
            ..RandomConfig::default()
        };
        for _ in 0..1_000 {
            let password = generator.random(&cfg).unwrap();
            for class in CharClass::ALL {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "{password} misses {class:?}"
                );
            }
        }
    }

    #[test]
    fn random_covers_remaining_classes_after_exclusion() {
        let mut generator = Generator::new();
        let cfg = RandomConfig {
            length: 3,
            no_symbols: true,
            exclude: Exclusion::new("ABCDEFGHIJKLMNOPQRSTUVWXY"),
            ..RandomConfig::default()
        };
        for _ in 0..500 {
            let password = generator.random(&cfg).unwrap();
            assert!(password.contains('Z'));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn random_never_emits_excluded_characters() {
        let mut generator = Generator::new();
        let cfg = RandomConfig {
            length: 64,
            exclude: Exclusion::new("0OIl1!@#"),
            ..RandomConfig::default()
        };
        for _ in 0..200 {
            let password = generator.random(&cfg).unwrap();
            assert!(!password.chars().any(|c| "0OIl1!@#".contains(c)));
        }
    }

    #[test]
    fn random_respects_disabled_classes() {
        let mut generator = Generator::new();
        let cfg = RandomConfig {
            length: 32,
            no_upper: true,
            no_symbols: true,
            ..RandomConfig::default()
        };
        for _ in 0..200 {
            let password = generator.random(&cfg).unwrap();
            assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn random_without_characters_fails() {
        let mut generator = Generator::new();
        let none = RandomConfig {
            no_upper: true,
            no_lower: true,
            no_digits: true,
            no_symbols: true,
            ..RandomConfig::default()
        };
        assert_eq!(generator.random(&none), Err(GenError::NoCharactersAvailable));

        let all_excluded = RandomConfig {
            no_upper: true,
            no_lower: true,
            no_symbols: true,
            exclude: Exclusion::new("0123456789"),
            ..RandomConfig::default()
        };
        assert_eq!(
            generator.random(&all_excluded),
            Err(GenError::NoCharactersAvailable)
        );
    }

    #[test]
    fn random_seeds_then_fills_then_shuffles() {
        // seed '3', fill '5' '7', shuffle j = 0 then j = 1
        let mut generator = scripted(&[3, 5, 7, 0, 1]);
        let cfg = RandomConfig {
            length: 3,
            no_upper: true,
            no_lower: true,
            no_symbols: true,
            ..RandomConfig::default()
        };
        assert_eq!(generator.random(&cfg).unwrap(), "753");
    }

    #[test]
    fn random_shorter_than_class_count_seeds_leading_classes() {
        // 'A' from upper, 'b' from lower, digits and symbols get no slot
        let mut generator = scripted(&[0, 1, 0]);
        let cfg = RandomConfig {
            length: 2,
            ..RandomConfig::default()
        };
        assert_eq!(generator.random(&cfg).unwrap(), "bA");
    }

    #[test]
    fn random_aborts_on_entropy_failure() {
        let mut generator = Generator::with_source(FailAfter { remaining: 5 }, WordList::builtin());
        let result = generator.random(&RandomConfig::default());
        assert!(matches!(result, Err(GenError::EntropyUnavailable { .. })));
    }

    #[test]
    fn repeated_calls_draw_fresh_output() {
        let mut generator = Generator::new();
        let cfg = RandomConfig::default();
        let first = generator.random(&cfg).unwrap();
        let second = generator.random(&cfg).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn segmented_has_expected_shape() {
        let mut generator = Generator::new();
        let cfg = SegmentConfig {
            segments: 3,
            seg_length: 4,
            separator: Separator::Dash,
            ..SegmentConfig::default()
        };
        for _ in 0..200 {
            let password = generator.segmented(&cfg).unwrap();
            assert_eq!(password.len(), 14);
            let parts: Vec<&str> = password.split('-').collect();
            assert_eq!(parts.len(), 3);
            for part in parts {
                assert_eq!(part.len(), 4);
                assert!(part.chars().all(|c| c.is_ascii_alphanumeric()));
            }
        }
    }

    #[test]
    fn segmented_uses_underscore_and_never_symbols() {
        let mut generator = Generator::new();
        let cfg = SegmentConfig::quick(Separator::Underscore);
        for _ in 0..200 {
            let password = generator.segmented(&cfg).unwrap();
            assert_eq!(password.matches('_').count(), 4);
            assert!(password.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn segmented_never_emits_excluded_characters() {
        let mut generator = Generator::new();
        let cfg = SegmentConfig {
            segments: 4,
            seg_length: 8,
            no_upper: true,
            exclude: Exclusion::new("aeiou01"),
            ..SegmentConfig::default()
        };
        for _ in 0..200 {
            let password = generator.segmented(&cfg).unwrap();
            assert!(!password.chars().any(|c| "aeiou01".contains(c)));
            assert!(!password.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn segmented_without_characters_fails() {
        let mut generator = Generator::new();
        let cfg = SegmentConfig {
            no_upper: true,
            no_lower: true,
            no_digits: true,
            ..SegmentConfig::default()
        };
        assert_eq!(generator.segmented(&cfg), Err(GenError::NoCharactersAvailable));
    }

    #[test]
    fn segmented_with_enormous_sizes_fails_cleanly() {
        let mut generator = Generator::with_source(FailAfter { remaining: 0 }, WordList::builtin());
        let cfg = SegmentConfig {
            segments: usize::MAX,
            seg_length: usize::MAX,
            ..SegmentConfig::default()
        };
        assert!(matches!(
            generator.segmented(&cfg),
            Err(GenError::EntropyUnavailable { .. })
        ));
    }

    #[test]
    fn segmented_aborts_on_entropy_failure() {
        let mut generator = Generator::with_source(FailAfter { remaining: 2 }, WordList::builtin());
        let result = generator.segmented(&SegmentConfig::default());
        assert!(matches!(result, Err(GenError::EntropyUnavailable { .. })));
    }
}
