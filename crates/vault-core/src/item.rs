//! The vault item record.
//!
//! Items are owned by the external item store. The keyword engine reads them
//! without mutating, and only looks at `id`, `title`, `content` and `keywords`.
//! The JSON shape matches the store's list endpoint:
//!
//! ```json
//! {
//!   "id": "c1f0...",
//!   "title": "Passeport",
//!   "content": "Numéro: XX123456",
//!   "type": "text",
//!   "keywords": ["administratif/papier/passport"],
//!   "createdAt": "2024-01-01T00:00:00Z",
//!   "updatedAt": "2024-01-01T00:00:00Z"
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ItemId
// ============================================================================

/// Opaque unique identifier of an item, stable for the item's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an item id from any string.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_core::ItemId;
    ///
    /// let id = ItemId::new("42");
    /// assert_eq!(id.as_str(), "42");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// ItemType
// ============================================================================

/// Kind of payload an item carries.
///
/// Drives which renderer the presentation layer picks. The keyword engine is
/// agnostic to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Free text body.
    #[default]
    Text,
    /// Uploaded image; `content` holds the storage path.
    Image,
    /// Uploaded document; `content` holds the storage path.
    Document,
}

impl ItemType {
    /// Returns the wire name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Item
// ============================================================================

/// A record stored in the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Text body, or a reference path to an uploaded file.
    #[serde(default)]
    pub content: Option<String>,
    /// Additional stored file paths (multi-file documents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Payload kind.
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    /// Raw keyword strings in insertion order, duplicates allowed.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates an empty item of the given type, timestamped now.
    pub fn new(id: impl Into<ItemId>, item_type: ItemType) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: None,
            content: None,
            files: None,
            item_type,
            keywords: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates an empty text item.
    pub fn text(id: impl Into<ItemId>) -> Self {
        Self::new(id, ItemType::Text)
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replaces the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attached file paths.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Builds a stored item from a create request.
    pub fn from_input(id: ItemId, input: CreateItemInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            files: input.files,
            item_type: input.item_type,
            keywords: input.keywords,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. Fields left as `None` are unchanged.
    ///
    /// `updated_at` is bumped to `now` even when nothing else changed.
    pub fn apply_update(&mut self, input: UpdateItemInput, now: DateTime<Utc>) {
        if let Some(title) = input.title {
            self.title = Some(title);
        }
        if let Some(content) = input.content {
            self.content = Some(content);
        }
        if let Some(files) = input.files {
            self.files = Some(files);
        }
        if let Some(keywords) = input.keywords {
            self.keywords = keywords;
        }
        self.updated_at = now;
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Payload for creating an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemInput {
    /// Optional title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional attached file paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Payload kind.
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    /// Raw keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Payload for a partial item update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    /// New title, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New file list, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// New keyword list, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

// ============================================================================
// Tests
// ============================================================================
