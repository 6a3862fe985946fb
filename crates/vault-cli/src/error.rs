//! Error types for vault-cli.

use thiserror::Error;

/// Result type alias for vault-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vault-core.
    #[error(transparent)]
    Core(#[from] vault_core::Error),

    /// Error from vault-storage.
    #[error(transparent)]
    Storage(#[from] vault_storage::Error),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Core(vault_core::Error::config(message))
    }
}
