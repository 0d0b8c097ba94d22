//! Error types for the diary sentiment pipeline

use thiserror::Error;

/// Custom error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our custom Error
pub type Result<T> = std::result::Result<T, Error>;
