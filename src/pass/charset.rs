//! Character set building for password generation.

use std::collections::BTreeSet;

use crate::error::{GenError, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Canonical class order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Characters that must never appear in output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusion(BTreeSet<char>);

impl Exclusion {
    pub fn new(chars: &str) -> Self {
        Exclusion(chars.chars().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn excludes(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// True if no character of `s` is excluded.
    pub fn allows(&self, s: &str) -> bool {
        self.is_empty() || !s.chars().any(|c| self.excludes(c))
    }

    /// `s` with every excluded character removed.
    pub fn filter(&self, s: &str) -> String {
        if self.is_empty() {
            return s.to_string();
        }
        s.chars().filter(|&c| !self.excludes(c)).collect()
    }
}

/// Which classes a generator may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl ClassSet {
    pub const ALL: ClassSet = ClassSet {
        upper: true,
        lower: true,
        digit: true,
        symbol: true,
    };

    pub fn enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Symbol => self.symbol,
        }
    }
}

/// Enabled, non-empty class pools and their concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub pools: Vec<Vec<u8>>,
    pub full: Vec<u8>,
}

/// Build the character pools for the enabled classes net of `exclude`.
pub fn build(classes: ClassSet, exclude: &Exclusion) -> Result<Charset> {
    let mut pools = Vec::new();
    let mut full = Vec::new();

    for class in CharClass::ALL {
        if !classes.enabled(class) {
            continue;
        }
        let pool: Vec<u8> = class
            .alphabet()
            .bytes()
            .filter(|&b| !exclude.excludes(b as char))
            .collect();
        if !pool.is_empty() {
            full.extend_from_slice(&pool);
            pools.push(pool);
        }
    }

    if full.is_empty() {
        return Err(GenError::NoCharactersAvailable);
    }
    Ok(Charset { pools, full })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_follow_class_order() {
        let set = build(ClassSet::ALL, &Exclusion::default()).unwrap();
        assert_eq!(set.pools.len(), 4);
        assert_eq!(set.pools[0], UPPERCASE.as_bytes());
        assert_eq!(set.pools[3], SYMBOLS.as_bytes());
        assert_eq!(set.full.len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn exclusions_are_removed_from_every_pool() {
        let set = build(ClassSet::ALL, &Exclusion::new("0OIl1!")).unwrap();
        for c in "0OIl1!".bytes() {
            assert!(!set.full.contains(&c));
        }
        assert_eq!(set.pools[2].len(), 8);
    }

    #[test]
    fn emptied_classes_are_dropped() {
        let classes = ClassSet {
            symbol: false,
            ..ClassSet::ALL
        };
        let set = build(classes, &Exclusion::new(DIGITS)).unwrap();
        assert_eq!(set.pools.len(), 2);
        assert!(set.full.iter().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn nothing_enabled_is_an_error() {
        let none = ClassSet {
            upper: false,
            lower: false,
            digit: false,
            symbol: false,
        };
        assert_eq!(
            build(none, &Exclusion::default()),
            Err(GenError::NoCharactersAvailable)
        );
    }

    #[test]
    fn everything_excluded_is_an_error() {
        let digits_only = ClassSet {
            upper: false,
            lower: false,
            digit: true,
            symbol: false,
        };
        assert_eq!(
            build(digits_only, &Exclusion::new("0123456789")),
            Err(GenError::NoCharactersAvailable)
        );
    }

    #[test]
    fn exclusion_filters_words() {
        let ex = Exclusion::new("ae");
        assert_eq!(ex.filter("tiger"), "tigr");
        assert!(ex.allows("moon"));
        assert!(!ex.allows("tiger"));
        assert_eq!(Exclusion::default().filter("tiger"), "tiger");
    }
}
