//! Saved defaults for interactive prompts and flag mode.

mod file;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use passgen::{Exclusion, PassphraseConfig, RandomConfig, SegmentConfig, Separator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Random,
    Segment,
    Passphrase,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Random => "random",
            Kind::Segment => "segment",
            Kind::Passphrase => "passphrase",
        })
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Kind::Random),
            "segment" | "segmented" => Ok(Kind::Segment),
            "passphrase" | "phrase" => Ok(Kind::Passphrase),
            _ => Err(format!(
                "unknown type {s:?} - use random, segment or passphrase"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub kind: Kind,
    pub count: usize,
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude: String,
    pub segments: usize,
    pub seg_length: usize,
    pub separator: Separator,
    pub words: usize,
    pub capitalize: bool,
    pub add_number: bool,
    pub copy: bool,
    pub include: Vec<String>,
}

impl Settings {
    pub fn load_from_file() -> std::io::Result<Self> {
        file::load(&file::path())
    }

    pub fn save_to_file(&self) -> std::io::Result<()> {
        file::save(self, &file::path())
    }

    pub fn path() -> PathBuf {
        file::path()
    }

    /// Saved settings, or defaults with a warning when the file is unusable.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default settings");
            crate::cli::prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        })
    }

    pub fn random_config(&self) -> RandomConfig {
        RandomConfig {
            length: self.length,
            no_upper: !self.upper,
            no_lower: !self.lower,
            no_digits: !self.digits,
            no_symbols: !self.symbols,
            exclude: Exclusion::new(&self.exclude),
        }
    }

    pub fn segment_config(&self) -> SegmentConfig {
        SegmentConfig {
            segments: self.segments,
            seg_length: self.seg_length,
            separator: self.separator,
            no_upper: !self.upper,
            no_lower: !self.lower,
            no_digits: !self.digits,
            exclude: Exclusion::new(&self.exclude),
        }
    }

    pub fn passphrase_config(&self) -> PassphraseConfig {
        PassphraseConfig {
            words: self.words,
            separator: self.separator,
            capitalize: self.capitalize,
            add_number: self.add_number,
            include: self.include.clone(),
            exclude: Exclusion::new(&self.exclude),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kind: Kind::Random,
            count: 1,
            length: 16,
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
            exclude: String::new(),
            segments: 3,
            seg_length: 4,
            separator: Separator::Dash,
            words: 4,
            capitalize: false,
            add_number: false,
            copy: true,
            include: Vec::new(),
        }
    }
}

/// Split a user list of words on commas and whitespace.
pub fn split_words(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}
