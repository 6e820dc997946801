//! Error types for vitrine

use thiserror::Error;

/// Main error type for vitrine operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for vitrine operations
pub type Result<T> = std::result::Result<T, Error>;
