//! Error types for lyric-fusion
//!
//! The reconciliation core itself never fails: no-input conditions yield an
//! explicit "no metrics" result and every ratio is defined as 0 on a zero
//! denominator. These variants cover configuration loading and driver I/O.

use thiserror::Error;

/// Common result type for lyric-fusion operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
