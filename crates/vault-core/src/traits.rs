//! Collaborator seams.
//!
//! The keyword engine never persists, authenticates, or touches file bytes.
//! These traits name the collaborators that do, so callers can plug in an
//! HTTP client, a database, or the in-memory implementations from
//! `vault-storage`.

use async_trait::async_trait;

use crate::error::Result;
use crate::item::{CreateItemInput, Item, ItemId, UpdateItemInput};

/// Item persistence.
///
/// Implementations must hand out consistent snapshots: the engine assumes the
/// collection does not change during a single build or filter call.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, most recently updated first.
    async fn list(&self) -> Result<Vec<Item>>;

    /// A single item. Missing ids yield [`Error::NotFound`](crate::Error::NotFound).
    async fn get(&self, id: &ItemId) -> Result<Item>;

    /// Stores a new item and returns it with its assigned id and timestamps.
    async fn create(&self, input: CreateItemInput) -> Result<Item>;

    /// Applies a partial update and returns the updated item.
    async fn update(&self, id: &ItemId, input: UpdateItemInput) -> Result<Item>;

    /// Removes an item.
    async fn delete(&self, id: &ItemId) -> Result<()>;

    /// Case-insensitive substring search over title, content and raw keywords.
    async fn search(&self, query: &str) -> Result<Vec<Item>>;
}

/// File upload and PDF merge service.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Stores the bytes and returns the storage path.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String>;

    /// Combines stored files into one PDF and returns its path.
    async fn merge_to_pdf(&self, paths: &[String]) -> Result<String>;
}

/// Master-password check.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `true` when the password opens the vault.
    async fn verify(&self, password: &str) -> Result<bool>;
}

/// Holds the session token between requests.
///
/// No confidentiality guarantee is made by this trait. Implementations must
/// not write the master password itself anywhere.
pub trait CredentialCache: Send + Sync {
    /// The cached token, if any.
    fn get(&self) -> Option<String>;

    /// Replaces the cached token.
    fn set(&self, token: &str);

    /// Forgets the cached token.
    fn clear(&self);
}
