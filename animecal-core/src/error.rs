//! Error types for animecal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in animecal operations.
#[derive(Error, Debug)]
pub enum AnimecalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for animecal operations.
pub type AnimecalResult<T> = Result<T, AnimecalError>;
