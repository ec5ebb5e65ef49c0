//! Per-invocation generator configurations.

use std::fmt;
use std::str::FromStr;

use super::charset::{ClassSet, Exclusion};

/// Joins segments and passphrase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Dash,
    Underscore,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Underscore => "_",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Separator::Dash),
            "_" => Ok(Separator::Underscore),
            other => Err(format!("separator must be - or _, got {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomConfig {
    pub length: usize,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub exclude: Exclusion,
}

impl RandomConfig {
    pub fn classes(&self) -> ClassSet {
        ClassSet {
            upper: !self.no_upper,
            lower: !self.no_lower,
            digit: !self.no_digits,
            symbol: !self.no_symbols,
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: 16,
            no_upper: false,
            no_lower: false,
            no_digits: false,
            no_symbols: false,
            exclude: Exclusion::default(),
        }
    }
}

/// Segmented passwords never contain symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentConfig {
    pub segments: usize,
    pub seg_length: usize,
    pub separator: Separator,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub exclude: Exclusion,
}

impl SegmentConfig {
    pub fn classes(&self) -> ClassSet {
        ClassSet {
            upper: !self.no_upper,
            lower: !self.no_lower,
            digit: !self.no_digits,
            symbol: false,
        }
    }

    /// The fixed shape used by `passgen -` and `passgen _`.
    pub fn quick(separator: Separator) -> Self {
        Self {
            segments: 5,
            seg_length: 5,
            separator,
            ..Self::default()
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            segments: 3,
            seg_length: 4,
            separator: Separator::Dash,
            no_upper: false,
            no_lower: false,
            no_digits: false,
            exclude: Exclusion::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    /// Total words, raised to the number of included words if smaller.
    pub words: usize,
    pub separator: Separator,
    pub capitalize: bool,
    pub add_number: bool,
    /// Caller words that must appear in the passphrase.
    pub include: Vec<String>,
    pub exclude: Exclusion,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            words: 4,
            separator: Separator::Dash,
            capitalize: false,
            add_number: false,
            include: Vec::new(),
            exclude: Exclusion::default(),
        }
    }
}
