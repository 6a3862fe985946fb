//! Tree navigation state.
//!
//! [`NavigatorState`] tracks which keyword nodes are expanded and which single
//! node is selected. It is owned by the presentation layer and survives tree
//! rebuilds because it refers to nodes by full path only.
//!
//! Expansion and selection are independent axes: selecting never expands or
//! collapses, and a node can be selected while hidden under a collapsed
//! parent.
//!
//! ```
//! use vault_core::Item;
//! use vault_keywords::{build_tree, NavigatorState};
//!
//! let items = vec![Item::text("1").with_keywords(["admin/id"])];
//! let tree = build_tree(&items);
//!
//! let mut state = NavigatorState::new();
//! assert_eq!(state.visible_nodes(&tree).len(), 1);
//!
//! state.toggle_expand("admin");
//! let rows: Vec<&str> = state
//!     .visible_nodes(&tree)
//!     .iter()
//!     .map(|row| row.node.full_path())
//!     .collect();
//! assert_eq!(rows, vec!["admin", "admin/id"]);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::path::KeywordPath;
use crate::tree::KeywordTreeNode;

/// Expanded paths and the selected path.
///
/// Paths are stored in canonical `/`-joined form; every method normalizes its
/// argument first, so `" a / b "` and `"a/b"` address the same node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    /// Full paths of the expanded nodes.
    #[serde(default)]
    pub expanded_paths: BTreeSet<String>,
    /// Full path of the selected node, or `None` for "all items".
    #[serde(default)]
    pub selected_path: Option<String>,
}

/// One row of the keyword panel.
#[derive(Debug, Clone, Copy)]
pub struct VisibleNode<'a> {
    /// The node shown on this row.
    pub node: &'a KeywordTreeNode,
    /// Indentation level; children of the root are at depth 0.
    pub depth: usize,
    /// Whether the node is expanded.
    pub is_expanded: bool,
    /// Whether the node is the selected one.
    pub is_selected: bool,
}

impl VisibleNode<'_> {
    /// Number of items aggregated at the node.
    pub fn count(&self) -> usize {
        self.node.count()
    }

    /// Whether the row gets an expand toggle.
    pub fn has_children(&self) -> bool {
        self.node.has_children()
    }
}

fn canonical(path: &str) -> String {
    KeywordPath::parse(path).join()
}

impl NavigatorState {
    /// Nothing expanded, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands a collapsed path or collapses an expanded one.
    ///
    /// Selection is untouched. Toggling twice restores the original state.
    pub fn toggle_expand(&mut self, path: &str) {
        let path = canonical(path);
        if !self.expanded_paths.remove(&path) {
            self.expanded_paths.insert(path);
        }
    }

    /// Selects a path, or clears the selection with `None`.
    ///
    /// A path that normalizes to empty is the root, which means "all items",
    /// so it clears the selection too. Expansion is untouched.
    pub fn select(&mut self, path: Option<&str>) {
        self.selected_path = path.map(canonical).filter(|path| !path.is_empty());
    }

    /// The selected path, parsed.
    pub fn selected(&self) -> Option<KeywordPath> {
        self.selected_path.as_deref().map(KeywordPath::parse)
    }

    /// Whether the path is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded_paths.contains(&canonical(path))
    }

    /// Whether the path is the selected one.
    pub fn is_selected(&self, path: &str) -> bool {
        let path = canonical(path);
        match &self.selected_path {
            Some(selected) => *selected == path,
            None => path.is_empty(),
        }
    }

    /// Row click: toggles expansion when the node has children, then selects
    /// it. Activating the root selects "all items".
    pub fn activate(&mut self, tree: &KeywordTreeNode, path: &str) {
        let path = canonical(path);
        if tree.find_str(&path).is_some_and(KeywordTreeNode::has_children) {
            self.toggle_expand(&path);
        }
        self.select(Some(&path));
    }

    /// Expands every node that has children.
    pub fn expand_all(&mut self, tree: &KeywordTreeNode) {
        self.expanded_paths.extend(
            tree.walk()
                .filter(|(node, _)| node.has_children())
                .map(|(node, _)| node.full_path().to_string()),
        );
    }

    /// Collapses everything. Selection is untouched.
    pub fn collapse_all(&mut self) {
        self.expanded_paths.clear();
    }

    /// Expands every proper ancestor of the path so its row becomes visible.
    pub fn expand_to(&mut self, path: &str) {
        let path = KeywordPath::parse(path);
        self.expanded_paths
            .extend(path.ancestors().map(|ancestor| ancestor.join()));
    }

    /// Rows of the keyword panel for this state.
    pub fn visible_nodes<'a>(&self, tree: &'a KeywordTreeNode) -> Vec<VisibleNode<'a>> {
        visible_nodes(tree, self)
    }
}

/// Depth-first pre-order rows starting at the root's children.
///
/// The root itself is never a row; its count is the "All Items" figure. A
/// node's children are listed only when the node is expanded.
pub fn visible_nodes<'a>(tree: &'a KeywordTreeNode, state: &NavigatorState) -> Vec<VisibleNode<'a>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&KeywordTreeNode, usize)> =
        tree.children().rev().map(|child| (child, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let is_expanded = state.expanded_paths.contains(node.full_path());
        rows.push(VisibleNode {
            node,
            depth,
            is_expanded,
            is_selected: state.selected_path.as_deref() == Some(node.full_path()),
        });
        if is_expanded {
            stack.extend(node.children().rev().map(|child| (child, depth + 1)));
        }
    }

    rows
}

// ============================================================================
// Tests
// ============================================================================
