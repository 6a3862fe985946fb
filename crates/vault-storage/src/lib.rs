//! Storage for Vault items.
//!
//! The keyword engine only ever sees an in-memory `&[Item]`. This crate
//! provides the pieces that get items into memory:
//!
//! - [`memory`]: [`MemoryItemStore`], an [`ItemStore`](vault_core::ItemStore)
//!   kept in process memory
//! - [`snapshot`]: [`SnapshotLoader`] for JSON item snapshots
//! - [`session`]: [`SessionCache`], a process-local credential cache

pub mod error;
pub mod memory;
pub mod session;
pub mod snapshot;

pub use error::{Error, Result};
pub use memory::MemoryItemStore;
pub use session::SessionCache;
pub use snapshot::{
    ErrorHandling, LoadError, LoadStats, SnapshotLoader, load_items, save_items, save_items_async,
};
