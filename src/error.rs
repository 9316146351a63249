//! Error types for the binary's fallible edges
//!
//! Generators and the playback controller never fail: degenerate input
//! produces an empty sequence. Only argument handling, file output and
//! terminal setup can go wrong, and those surface as [`AppError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// No algorithm named on the command line
    #[error("No algorithm given (run with --list to see the catalogue)")]
    MissingAlgorithm,

    /// Input array or parameter rejected before generation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
