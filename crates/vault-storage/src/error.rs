//! Error types for vault-storage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for vault-storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or storing items.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vault-core.
    #[error("Core error: {0}")]
    Core(#[from] vault_core::Error),

    /// The snapshot file is not a JSON array of items.
    #[error("Invalid snapshot {}: {message}", .path.display())]
    InvalidSnapshot {
        /// Snapshot file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// A single snapshot entry could not be read as an item.
    #[error("Invalid item at index {index}: {message}")]
    InvalidEntry {
        /// Position of the entry in the snapshot array.
        index: usize,
        /// Deserialization error.
        message: String,
    },
}

impl Error {
    /// Creates an invalid-snapshot error.
    pub fn invalid_snapshot(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for a store miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: Error = vault_core::Error::not_found("42").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Core error: Item not found: 42");
    }

    #[test]
    fn test_invalid_snapshot_display() {
        let err = Error::invalid_snapshot("/tmp/items.json", "expected an array");
        assert_eq!(
            err.to_string(),
            "Invalid snapshot /tmp/items.json: expected an array"
        );
        assert!(!err.is_not_found());
    }
}
