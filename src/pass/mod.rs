//! Password and passphrase generation.

pub mod charset;
mod config;
mod generate;
mod passphrase;
mod words;

pub use charset::{CharClass, ClassSet, Exclusion};
pub use config::{PassphraseConfig, RandomConfig, SegmentConfig, Separator};
pub use generate::Generator;
pub use words::{WORDS, WordList};
