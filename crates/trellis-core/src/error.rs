//! Error types for Trellis

use thiserror::Error;

/// Main error type for Trellis component inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrellisError {
    /// A toggle switch needs exactly two options, fewer were supplied
    #[error("Toggle switch needs two options, got {0}")]
    TooFewOptions(usize),

    /// A toggle switch needs exactly two options, more were supplied
    #[error("Toggle switch takes two options, got {0}")]
    TooManyOptions(usize),

    /// Both options carry the same value, so they cannot be told apart
    #[error("Duplicate option value: {0}")]
    DuplicateOptionValue(String),

    /// Field status text did not name a known status
    #[error("Unknown field status: {0}")]
    UnknownStatus(String),

    /// Platform text did not name a known platform
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Density text did not name a known size variant
    #[error("Unknown sizeY variant: {0}")]
    UnknownSizeY(String),
}

/// Result type alias using TrellisError
pub type TrellisResult<T> = Result<T, TrellisError>;
