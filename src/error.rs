//! Error types for Orbitscope.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Orbitscope operations.
pub type Result<T> = std::result::Result<T, OrbitscopeError>;

/// Errors that can occur in Orbitscope.
#[derive(Debug, Error)]
pub enum OrbitscopeError {
    /// Failed to open a trajectory file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A row of a trajectory file could not be parsed.
    #[error("Malformed trajectory row in {path} at line {line}: {reason}")]
    Parse {
        /// File containing the bad row.
        path: PathBuf,
        /// 1-based line number of the bad row.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl OrbitscopeError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(path: PathBuf, line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            path,
            line,
            reason: reason.into(),
        }
    }
}
