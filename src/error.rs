//! Error types for the word engine.

use thiserror::Error;

/// Why a submitted word was turned down.
///
/// Variants are listed in the order the validation pipeline checks them;
/// the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The word can't be the same as the original.")]
    SameAsSeed,

    #[error("The word must be at least 3 letters long.")]
    TooShort,

    #[error("This word can't be created from {seed}.")]
    NotDerivable { seed: String },

    #[error("This word has already been used.")]
    AlreadyUsed,

    #[error("This is not a real word.")]
    NotARealWord,
}

impl Rejection {
    /// Stable reason code, independent of the display message.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::SameAsSeed => "same-as-seed",
            Rejection::TooShort => "too-short",
            Rejection::NotDerivable { .. } => "not-derivable",
            Rejection::AlreadyUsed => "already-used",
            Rejection::NotARealWord => "not-a-real-word",
        }
    }

    /// Title shown above the message in the alert popup.
    pub fn title(&self) -> &'static str {
        "Ineligible Word"
    }
}

/// Errors raised by a [`PersistenceStore`](crate::words::store::PersistenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed for a reason other than it being absent.
    #[error("failed to load '{key}': {source}")]
    Load {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a key failed.
    #[error("failed to save '{key}': {source}")]
    Save {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes were not the JSON we expected.
    #[error("failed to decode '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
