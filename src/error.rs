//! Error type for the generation engine.

use thiserror::Error;

/// Everything that can stop a generation call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("secure random source unavailable: {reason}")]
    EntropyUnavailable { reason: String },

    #[error("no characters available - all sets excluded")]
    NoCharactersAvailable,

    #[error("no words available - every word contains an excluded character")]
    NoWordsAvailable,

    #[error("cannot draw from an empty range")]
    EmptyRange,
}

impl GenError {
    pub fn entropy(reason: impl Into<String>) -> Self {
        Self::EntropyUnavailable {
            reason: reason.into(),
        }
    }
}

impl From<getrandom::Error> for GenError {
    fn from(err: getrandom::Error) -> Self {
        Self::entropy(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
