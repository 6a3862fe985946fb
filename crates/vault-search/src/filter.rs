//! Combined free-text + keyword item filter.
//!
//! # Matching rules
//!
//! - **Text** (when the query text is non-empty): the lower-cased title,
//!   content, or any lower-cased raw keyword contains the lower-cased query as
//!   a substring. Missing title/content never match.
//! - **Keyword** (when a path is selected): at least one of the item's
//!   normalized keyword paths starts with the selected path. This is exactly
//!   the set of items aggregated at that tree node.
//! - An item passes when it satisfies every active constraint. With no active
//!   constraint every item passes.
//!
//! Filtering is stable: surviving items keep their input order.

use vault_core::Item;
use vault_keywords::{KeywordPath, KeywordTreeNode};

use crate::types::FilterQuery;

/// Case-insensitive substring match over title, content and raw keywords.
///
/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_text(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    item.title.as_deref().is_some_and(contains)
        || item.content.as_deref().is_some_and(contains)
        || item.keywords.iter().any(|keyword| contains(keyword.as_str()))
}

/// Whether one of the item's keyword paths lies at or below `path`.
pub fn matches_keyword(item: &Item, path: &KeywordPath) -> bool {
    if path.is_empty() {
        return true;
    }
    item.keywords.iter().any(|raw| {
        let keyword = KeywordPath::parse(raw);
        !keyword.is_empty() && keyword.starts_with(path)
    })
}

/// A [`FilterQuery`] prepared for repeated matching.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    needle: String,
    selected: Option<KeywordPath>,
}

impl ItemFilter {
    /// Prepares a query.
    pub fn new(query: &FilterQuery) -> Self {
        Self {
            needle: query.text.to_lowercase(),
            selected: query.selected_path.clone().filter(|path| !path.is_empty()),
        }
    }

    /// Whether the item satisfies every active constraint.
    pub fn matches(&self, item: &Item) -> bool {
        matches_text(item, &self.needle)
            && self
                .selected
                .as_ref()
                .is_none_or(|path| matches_keyword(item, path))
    }

    /// Items passing the filter, in input order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Like [`apply`](Self::apply), but narrows the keyword constraint
    /// through an already built tree first.
    ///
    /// Node membership is keyed by id, so each candidate is still checked
    /// against its own keywords; a collection that repeats an id gives the
    /// same result as [`apply`](Self::apply). A selected path missing from
    /// the tree yields no items.
    pub fn apply_with_tree<'a>(&self, items: &'a [Item], tree: &KeywordTreeNode) -> Vec<&'a Item> {
        let Some(path) = &self.selected else {
            return self.apply(items);
        };
        let Some(node) = tree.find(path) else {
            log::debug!("Selected keyword {path} is not in the tree");
            return Vec::new();
        };
        items
            .iter()
            .filter(|item| {
                node.contains(&item.id)
                    && matches_keyword(item, path)
                    && matches_text(item, &self.needle)
            })
            .collect()
    }
}

/// Filters items with a query. Shorthand for `ItemFilter::new(query).apply(items)`.
pub fn apply<'a>(items: &'a [Item], query: &FilterQuery) -> Vec<&'a Item> {
    ItemFilter::new(query).apply(items)
}

// ============================================================================
// Tests
// ============================================================================
