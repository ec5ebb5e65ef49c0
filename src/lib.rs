//! Password, segmented password and passphrase generation on top of the
//! operating system's secure random source.

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{GenError, Result};
pub use pass::{
    CharClass, Exclusion, Generator, PassphraseConfig, RandomConfig, SegmentConfig, Separator,
    WordList,
};
pub use rand::{EntropySource, OsEntropy, SecureRandom};
