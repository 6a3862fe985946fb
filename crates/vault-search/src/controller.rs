//! Search orchestration.
//!
//! [`SearchController`] owns the item collection, the text query and the
//! navigator state. Every change refreshes the keyword tree, so the read side
//! (`visible_items`, `visible_nodes`, `view`) is always answered from the
//! current inputs.

use vault_core::Item;
use vault_keywords::{KeywordPath, KeywordTreeNode, NavigatorState, VisibleNode};

use crate::cache::TreeCache;
use crate::filter::ItemFilter;
use crate::types::FilterQuery;

pub use crate::types::{SearchOptions, SelectionPolicy};

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    /// Count shown on the "All Items" row (the tree root's count).
    pub all_items_count: usize,
    /// Rows of the keyword panel.
    pub visible_nodes: Vec<VisibleNode<'a>>,
    /// Items of the main panel, in collection order.
    pub visible_items: Vec<&'a Item>,
    /// The active query.
    pub query: FilterQuery,
    /// Whether the selected path is missing from the tree.
    pub selection_is_orphaned: bool,
}

/// Keeps the tree, the keyword panel and the item list in step.
#[derive(Debug, Clone)]
pub struct SearchController {
    items: Vec<Item>,
    text: String,
    navigator: NavigatorState,
    options: SearchOptions,
    cache: TreeCache,
}

impl SearchController {
    /// Creates a controller with default options.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_options(items, SearchOptions::default())
    }

    /// Creates a controller with explicit options.
    pub fn with_options(items: Vec<Item>, options: SearchOptions) -> Self {
        let mut controller = Self {
            items,
            text: String::new(),
            navigator: NavigatorState::new(),
            options,
            cache: TreeCache::new(options.memoize_tree),
        };
        controller.refresh();
        controller
    }

    fn refresh(&mut self) {
        if self.cache.refresh(&self.items) {
            log::debug!(
                "Rebuilt keyword tree for {} items ({} nodes)",
                self.items.len(),
                self.cache.stats().nodes_created
            );
        }
        if self.selection_is_orphaned() {
            log::debug!(
                "Selected keyword {:?} is no longer in the tree",
                self.navigator.selected_path
            );
        }
    }

    // ------------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------------

    /// Replaces the item collection.
    ///
    /// Navigator state is kept; a selection that no longer exists is reported
    /// by [`selection_is_orphaned`](Self::selection_is_orphaned), not cleared.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refresh();
    }

    /// Updates the text query, applying the selection policy.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let clears_selection = self.options.selection_policy == SelectionPolicy::ClearOnEmptyText;
        if self.text.is_empty() && clears_selection {
            self.navigator.select(None);
        }
        self.refresh();
    }

    /// Selects a keyword path, or "all items" with `None`. The text query is
    /// never touched.
    pub fn select(&mut self, path: Option<&str>) {
        self.navigator.select(path);
        self.refresh();
    }

    /// Expands or collapses a node.
    pub fn toggle_expand(&mut self, path: &str) {
        self.navigator.toggle_expand(path);
    }

    /// Row click on the keyword panel.
    pub fn activate(&mut self, path: &str) {
        self.navigator.activate(self.cache.tree(), path);
        self.refresh();
    }

    /// Expands every node with children.
    pub fn expand_all(&mut self) {
        self.navigator.expand_all(self.cache.tree());
    }

    /// Collapses every node.
    pub fn collapse_all(&mut self) {
        self.navigator.collapse_all();
    }

    /// Expands the ancestors of a path.
    pub fn expand_to(&mut self, path: &str) {
        self.navigator.expand_to(path);
    }

    /// Replaces the navigator state wholesale, e.g. one restored from disk.
    pub fn set_navigator(&mut self, navigator: NavigatorState) {
        self.navigator = navigator;
        self.refresh();
    }

    // ------------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------------

    /// The item collection.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The text query.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The navigator state.
    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    /// The options in effect.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The current keyword tree.
    pub fn tree(&self) -> &KeywordTreeNode {
        self.cache.tree()
    }

    /// Number of tree builds so far.
    pub fn build_count(&self) -> usize {
        self.cache.build_count()
    }

    /// The filter query derived from the text and the selected path.
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            text: self.text.clone(),
            selected_path: self.navigator.selected(),
        }
    }

    /// The "All Items" figure.
    pub fn all_items_count(&self) -> usize {
        self.tree().count()
    }

    /// Items matching the query, in collection order.
    pub fn visible_items(&self) -> Vec<&Item> {
        ItemFilter::new(&self.query()).apply_with_tree(&self.items, self.tree())
    }

    /// Rows of the keyword panel.
    pub fn visible_nodes(&self) -> Vec<VisibleNode<'_>> {
        self.navigator.visible_nodes(self.tree())
    }

    /// Whether a path is selected that the current tree does not contain.
    pub fn selection_is_orphaned(&self) -> bool {
        self.navigator
            .selected()
            .is_some_and(|path: KeywordPath| self.tree().find(&path).is_none())
    }

    /// One consistent snapshot of both panels.
    pub fn view(&self) -> SearchView<'_> {
        SearchView {
            all_items_count: self.all_items_count(),
            visible_nodes: self.visible_nodes(),
            visible_items: self.visible_items(),
            query: self.query(),
            selection_is_orphaned: self.selection_is_orphaned(),
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ============================================================================
// Tests
// ============================================================================
