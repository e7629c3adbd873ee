//! Error types for the sticks crate

use thiserror::Error;

/// Main error type for the sticks crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("initial pile size must be at least 1, got {size}")]
    InvalidPileSize { size: u32 },

    #[error("pile size {pile} exceeds strategy table capacity {capacity}")]
    PileOutOfRange { pile: u32, capacity: u32 },

    #[error("strategy bag for pile size {pile} has no candidates")]
    EmptyBag { pile: u32 },

    #[error("move requested before any pile update")]
    NoPileObserved,

    #[error("invalid loss rule '{input}'. Expected one of: {expected}")]
    ParseLossResponse { input: String, expected: String },

    #[error("console input closed")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
