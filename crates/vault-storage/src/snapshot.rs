//! JSON snapshot loading.
//!
//! A snapshot is the item list exactly as the store's list endpoint returns
//! it: a JSON array of item records.
//!
//! ```json
//! [
//!   { "id": "1", "title": "Passport", "type": "text", "keywords": ["admin/id"] }
//! ]
//! ```
//!
//! A document that is not an array is always an error. What happens to a
//! single entry that does not deserialize, or that repeats an earlier id,
//! depends on [`ErrorHandling`]. The first entry for an id is the one kept.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vault_core::Item;

use crate::error::{Error, Result};

// ============================================================================
// Error handling options
// ============================================================================

/// Options for handling bad entries while loading a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorHandling {
    /// Stop on first bad entry.
    #[default]
    FailFast,
    /// Continue and collect errors.
    Collect,
    /// Log and skip bad entries.
    Skip,
}

/// One entry that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadError {
    /// Position in the snapshot array.
    pub index: usize,
    /// Deserialization error, or the repeated id.
    pub message: String,
}

/// Statistics from a snapshot load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Entries in the snapshot array.
    pub entries_seen: usize,
    /// Entries turned into items.
    pub items_loaded: usize,
    /// Entries dropped.
    pub entries_skipped: usize,
    /// Why each dropped entry was dropped.
    pub errors: Vec<LoadError>,
}

// ============================================================================
// SnapshotLoader
// ============================================================================

/// Loads items from a JSON snapshot file.
///
/// # Example
///
/// ```rust,no_run
/// use vault_storage::{ErrorHandling, SnapshotLoader};
///
/// let (items, stats) = SnapshotLoader::new("items.json")
///     .with_error_handling(ErrorHandling::Skip)
///     .load()?;
/// println!("{} items, {} skipped", items.len(), stats.entries_skipped);
/// # Ok::<(), vault_storage::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    path: PathBuf,
    error_handling: ErrorHandling,
}

impl SnapshotLoader {
    /// Creates a loader for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            error_handling: ErrorHandling::default(),
        }
    }

    /// Sets the error handling strategy.
    pub fn with_error_handling(mut self, handling: ErrorHandling) -> Self {
        self.error_handling = handling;
        self
    }

    /// The snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the snapshot.
    pub fn load(&self) -> Result<(Vec<Item>, LoadStats)> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| vault_core::Error::io_with_path(e, &self.path))?;
        self.parse(&content)
    }

    /// Like [`load`](Self::load), reading the file on the tokio runtime.
    pub async fn load_async(&self) -> Result<(Vec<Item>, LoadStats)> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| vault_core::Error::io_with_path(e, &self.path))?;
        self.parse(&content)
    }

    /// Parses snapshot text.
    pub fn parse(&self, content: &str) -> Result<(Vec<Item>, LoadStats)> {
        let entries: Vec<Value> = serde_json::from_str(content)
            .map_err(|e| Error::invalid_snapshot(&self.path, e.to_string()))?;

        let mut items = Vec::with_capacity(entries.len());
        let mut stats = LoadStats {
            entries_seen: entries.len(),
            ..Default::default()
        };

        let mut seen = HashSet::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let parsed = serde_json::from_value::<Item>(entry)
                .map_err(|e| e.to_string())
                .and_then(|item| {
                    if seen.insert(item.id.clone()) {
                        Ok(item)
                    } else {
                        Err(format!("duplicate item id {}", item.id))
                    }
                });

            match parsed {
                Ok(item) => items.push(item),
                Err(message) => {
                    let load_error = LoadError { index, message };

                    match self.error_handling {
                        ErrorHandling::FailFast => {
                            return Err(Error::InvalidEntry {
                                index,
                                message: load_error.message,
                            });
                        }
                        ErrorHandling::Collect => {
                            stats.entries_skipped += 1;
                            stats.errors.push(load_error);
                        }
                        ErrorHandling::Skip => {
                            stats.entries_skipped += 1;
                            log::warn!(
                                "Skipping entry {index} of {}: {}",
                                self.path.display(),
                                load_error.message
                            );
                            stats.errors.push(load_error);
                        }
                    }
                }
            }
        }

        stats.items_loaded = items.len();
        log::debug!(
            "Loaded {}/{} items from {}",
            stats.items_loaded,
            stats.entries_seen,
            self.path.display()
        );

        Ok((items, stats))
    }
}

/// Loads a snapshot, failing on the first bad entry.
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    SnapshotLoader::new(path.as_ref()).load().map(|(items, _)| items)
}

/// Writes items as a pretty-printed snapshot.
pub fn save_items(path: impl AsRef<Path>, items: &[Item]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| vault_core::Error::io_with_path(e, parent))?;
    }
    let content = serde_json::to_string_pretty(items).map_err(vault_core::Error::from)?;
    std::fs::write(path, content).map_err(|e| vault_core::Error::io_with_path(e, path))?;
    Ok(())
}

/// Like [`save_items`], writing the file on the tokio runtime.
pub async fn save_items_async(path: impl AsRef<Path>, items: &[Item]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| vault_core::Error::io_with_path(e, parent))?;
    }
    let content = serde_json::to_string_pretty(items).map_err(vault_core::Error::from)?;
    tokio::fs::write(path, content)
        .await
        .map_err(|e| vault_core::Error::io_with_path(e, path))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
