//! Error types for vault-core.
//!
//! The keyword engine itself is total and never produces these errors; they
//! only arise at the collaborator boundary (store, snapshot loading, config).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the edges of the vault.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", .path.display())]
    IoWithPath {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No item exists with the given id.
    #[error("Item not found: {id}")]
    NotFound {
        /// Id that was looked up.
        id: String,
    },

    /// Input rejected by a collaborator.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates an I/O error carrying the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a not-found error for an item id.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates a validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation(message.into())
    }

    /// Returns `true` when the error reports a missing item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
