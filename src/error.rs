//! MemoMemo error types

use thiserror::Error;

/// MemoMemo error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid capture input (empty or malformed)
    #[error("Capture error: {0}")]
    Capture(String),

    /// Classification pipeline error
    #[error("Classification error: {0}")]
    Classify(String),

    /// Memory store error
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for MemoMemo operations
pub type Result<T> = std::result::Result<T, Error>;
