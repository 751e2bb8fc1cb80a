//! Error types for radius-check.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for radius-check operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that can occur while collecting or scanning files
#[derive(Debug, Error)]
pub enum CheckError {
    /// A file or directory could not be read
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error in {}: {message}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A rule pattern failed to compile
    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl CheckError {
    /// Create an I/O error for a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
