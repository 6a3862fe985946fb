//! Shared types, collaborator traits, and errors for Vault.
//!
//! This crate provides the foundational types used across all Vault crates.
//! It has no internal Vault dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`item`]: The vault item record and its create/update inputs
//! - [`traits`]: Seams to the collaborators the engine never owns
//!   (item store, document service, authenticator, credential cache)

pub mod error;
pub mod item;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use item::{CreateItemInput, Item, ItemId, ItemType, UpdateItemInput};
pub use traits::{Authenticator, CredentialCache, DocumentService, ItemStore};
