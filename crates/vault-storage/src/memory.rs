//! In-memory [`ItemStore`].
//!
//! Stands in for the remote item API in tests and in the CLI. Items live in
//! a `HashMap` behind a tokio `RwLock`; `list` and `search` sort on the way
//! out so callers always see newest-updated first.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use vault_core::{CreateItemInput, Error, Item, ItemId, ItemStore, Result, UpdateItemInput};
use vault_search::matches_text;

/// Thread-safe item store kept entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
}

impl MemoryItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with items. Later duplicates of an id win.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id.clone(), item)).collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns `true` when the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Replaces the whole collection.
    pub async fn replace_all(&self, items: impl IntoIterator<Item = Item>) {
        let mut lock = self.items.write().await;
        *lock = items.into_iter().map(|item| (item.id.clone(), item)).collect();
    }
}

/// Newest `updated_at` first; ties broken by id so the order is total.
fn newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self.items.read().await.values().cloned().collect();
        newest_first(&mut items);
        Ok(items)
    }

    async fn get(&self, id: &ItemId) -> Result<Item> {
        self.items
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    async fn create(&self, input: CreateItemInput) -> Result<Item> {
        let item = Item::from_input(ItemId::generate(), input, Utc::now());
        log::debug!("Creating item {}", item.id);
        self.items
            .write()
            .await
            .insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn update(&self, id: &ItemId, input: UpdateItemInput) -> Result<Item> {
        let mut lock = self.items.write().await;
        let item = lock
            .get_mut(id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;
        item.apply_update(input, Utc::now());
        Ok(item.clone())
    }

    async fn delete(&self, id: &ItemId) -> Result<()> {
        self.items
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>> {
        let needle = query.to_lowercase();
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| matches_text(item, &needle))
            .cloned()
            .collect();
        newest_first(&mut items);
        Ok(items)
    }
}

// ============================================================================
// Tests
// ============================================================================
