//! Fixer error types.

use thiserror::Error;

/// Errors that can occur while fixing files.
///
/// The transforms themselves never fail; these cover the surrounding I/O and
/// configuration plumbing.
#[derive(Debug, Error)]
pub enum FixerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File access error.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixerError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
