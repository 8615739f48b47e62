//! Error types for the numwords-core library.

use thiserror::Error;

/// Main error type for the numwords library.
#[derive(Error, Debug)]
pub enum NumWordsError {
    /// Number extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a line does not yield a convertible number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No free-standing number on the line.
    #[error("no number found")]
    NoNumber,

    /// More than one free-standing number on the line.
    #[error("expected one number, found {count}")]
    MultipleNumbers { count: usize },

    /// The number needs a scale word beyond "trillion".
    #[error("number out of range: {digits}")]
    OutOfRange { digits: String },
}

/// Result type for the numwords library.
pub type Result<T> = std::result::Result<T, NumWordsError>;
