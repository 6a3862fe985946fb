//! The keyword prefix tree.
//!
//! Every node stands for one keyword prefix and aggregates the items whose
//! normalized keyword paths pass through it. A tree is never mutated after
//! [`KeywordTreeBuilder`](crate::KeywordTreeBuilder) returns it; it is rebuilt
//! wholesale whenever the item collection changes.
//!
//! # Invariants
//!
//! - The item set of a node contains the item set of each of its children.
//! - Children are keyed by segment and iterate in lexicographic order.
//! - Node identity is its full path: the same path always yields an
//!   equivalent node across rebuilds.

use std::collections::{BTreeMap, BTreeSet};

use vault_core::ItemId;

use crate::path::KeywordPath;

/// One prefix in the keyword tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTreeNode {
    segment: String,
    path: KeywordPath,
    full_path: String,
    children: BTreeMap<String, KeywordTreeNode>,
    items: BTreeSet<ItemId>,
}

impl KeywordTreeNode {
    /// Creates the synthetic root (empty segment and path).
    pub fn root() -> Self {
        Self::with_path(KeywordPath::root())
    }

    fn with_path(path: KeywordPath) -> Self {
        Self {
            segment: path.last().unwrap_or_default().to_string(),
            full_path: path.join(),
            path,
            children: BTreeMap::new(),
            items: BTreeSet::new(),
        }
    }

    /// The last component this node adds; empty for the root.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// `/`-joined path from the root; empty for the root.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Normalized path of this node.
    pub fn path(&self) -> &KeywordPath {
        &self.path
    }

    /// Depth below the root (root = 0, top-level keywords = 1).
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Returns `true` for the synthetic root.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns `true` when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` when the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in lexicographic segment order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &KeywordTreeNode> {
        self.children.values()
    }

    /// Number of immediate children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The immediate child for a segment.
    pub fn child(&self, segment: &str) -> Option<&KeywordTreeNode> {
        self.children.get(segment)
    }

    /// Ids of the items aggregated at this node, each counted once.
    pub fn items(&self) -> &BTreeSet<ItemId> {
        &self.items
    }

    /// Number of distinct items aggregated at this node.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the item is aggregated at this node.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains(id)
    }

    /// Resolves a descendant (or this node, for the empty path).
    ///
    /// The path is interpreted relative to this node.
    pub fn find(&self, path: &KeywordPath) -> Option<&KeywordTreeNode> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Resolves a descendant from a raw path string.
    pub fn find_str(&self, raw: &str) -> Option<&KeywordTreeNode> {
        self.find(&KeywordPath::parse(raw))
    }

    /// Pre-order walk over every descendant (this node excluded).
    ///
    /// Yields `(node, depth)` where direct children have depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.children.values().rev().map(|child| (child, 0)).collect(),
        }
    }

    /// Total number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.walk().count()
    }

    // ------------------------------------------------------------------------
    // Construction (builder only)
    // ------------------------------------------------------------------------

    /// Adds an item to this node. Returns `false` if it was already present.
    pub(crate) fn insert_item(&mut self, id: &ItemId) -> bool {
        if self.items.contains(id) {
            return false;
        }
        self.items.insert(id.clone())
    }

    /// The child for `segment`, created on first use.
    ///
    /// Returns the child and whether it was newly created.
    pub(crate) fn child_entry(&mut self, segment: &str) -> (&mut KeywordTreeNode, bool) {
        let created = !self.children.contains_key(segment);
        let path = &self.path;
        let child = self
            .children
            .entry(segment.to_string())
            .or_insert_with(|| Self::with_path(path.child(segment)));
        (child, created)
    }
}

impl Default for KeywordTreeNode {
    fn default() -> Self {
        Self::root()
    }
}

/// Pre-order iterator returned by [`KeywordTreeNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(&'a KeywordTreeNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a KeywordTreeNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.values().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}
