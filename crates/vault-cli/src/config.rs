//! Configuration for the `vault` CLI.
//!
//! Resolution order for the config file:
//!
//! 1. `--config PATH`, or the `VAULT_CONFIG` environment variable
//! 2. `<config dir>/vault/config.toml` (e.g. `~/.config/vault/config.toml`)
//!
//! A missing file is not an error; every field has a default.
//!
//! ```toml
//! items_path = "/home/me/.local/share/vault/items.json"
//!
//! [search]
//! clear_selection_on_empty_text = false
//! memoize_tree = true
//!
//! [tree]
//! expand_all = false
//! indent = 2
//!
//! [snapshot]
//! on_error = "skip"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vault_core::{Error, Result};
use vault_search::{SearchOptions, SelectionPolicy};
use vault_storage::ErrorHandling;

/// Name used for the config and data directories.
pub const PROJECT_NAME: &str = "vault";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// JSON item snapshot read by every command.
    pub items_path: PathBuf,
    /// Filtering behavior.
    pub search: SearchConfig,
    /// Keyword panel rendering.
    pub tree: TreeConfig,
    /// Snapshot loading.
    pub snapshot: SnapshotConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Clear the keyword selection whenever the text query becomes empty.
    pub clear_selection_on_empty_text: bool,
    /// Skip tree rebuilds when no item keywords changed.
    pub memoize_tree: bool,
}

/// `[tree]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Start with every keyword expanded.
    pub expand_all: bool,
    /// Spaces per depth level.
    pub indent: usize,
}

/// `[snapshot]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// What to do with entries that are not valid items.
    pub on_error: ErrorHandling,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            items_path: default_items_path(),
            search: SearchConfig::default(),
            tree: TreeConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            clear_selection_on_empty_text: false,
            memoize_tree: true,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            expand_all: false,
            indent: 2,
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorHandling::Skip,
        }
    }
}

fn default_items_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(PROJECT_NAME).join("items.json"))
        .unwrap_or_else(|| PathBuf::from("items.json"))
}

impl SearchConfig {
    /// Controller options for this section.
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            selection_policy: if self.clear_selection_on_empty_text {
                SelectionPolicy::ClearOnEmptyText
            } else {
                SelectionPolicy::Independent
            },
            memoize_tree: self.memoize_tree,
        }
    }
}

impl VaultConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path when given, otherwise the default location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the resolved config file, or defaults when there is none.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serializes as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Overrides the snapshot path, e.g. from `--items`.
    pub fn with_items_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.items_path = path;
        }
        self
    }
}
