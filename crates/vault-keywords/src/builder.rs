//! KeywordTreeBuilder for folding items into a keyword prefix tree.
//!
//! The builder walks every item's raw keywords:
//!
//! 1. Normalize the keyword; an empty path is skipped
//! 2. Add the item to the root
//! 3. Walk the segments, creating missing nodes, and add the item to each
//!    node on the way down
//!
//! An item is counted once per node no matter how many of its keywords pass
//! through that node. An item whose keywords are all empty appears nowhere,
//! not even at the root.

use vault_core::Item;

use crate::path::KeywordPath;
use crate::tree::KeywordTreeNode;

/// Statistics from a tree build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Items passed in.
    pub items_seen: usize,
    /// Items with at least one non-empty keyword (the root count).
    pub items_indexed: usize,
    /// Raw keywords that normalized to a non-empty path.
    pub keywords_indexed: usize,
    /// Raw keywords that normalized to the empty path.
    pub keywords_skipped: usize,
    /// Tree nodes created, root excluded.
    pub nodes_created: usize,
}

/// Builder for keyword prefix trees.
///
/// Stateless; a single builder can be reused for any number of builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordTreeBuilder;

impl KeywordTreeBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the tree and returns its root.
    pub fn build(&self, items: &[Item]) -> KeywordTreeNode {
        self.build_with_stats(items).0
    }

    /// Builds the tree and reports what went into it.
    pub fn build_with_stats(&self, items: &[Item]) -> (KeywordTreeNode, BuildStats) {
        let mut root = KeywordTreeNode::root();
        let mut stats = BuildStats {
            items_seen: items.len(),
            ..Default::default()
        };

        for item in items {
            for raw in &item.keywords {
                let path = KeywordPath::parse(raw);
                if path.is_empty() {
                    log::trace!("Skipping empty keyword {raw:?} on item {}", item.id);
                    stats.keywords_skipped += 1;
                    continue;
                }
                stats.keywords_indexed += 1;

                if root.insert_item(&item.id) {
                    stats.items_indexed += 1;
                }

                let mut node = &mut root;
                for segment in path.segments() {
                    let (child, created) = node.child_entry(segment);
                    if created {
                        stats.nodes_created += 1;
                    }
                    child.insert_item(&item.id);
                    node = child;
                }
            }
        }

        log::debug!(
            "Built keyword tree: {} nodes, {}/{} items indexed, {} keywords skipped",
            stats.nodes_created,
            stats.items_indexed,
            stats.items_seen,
            stats.keywords_skipped
        );

        (root, stats)
    }
}

/// Builds a keyword tree from items.
///
/// Shorthand for `KeywordTreeBuilder::new().build(items)`.
pub fn build_tree(items: &[Item]) -> KeywordTreeNode {
    KeywordTreeBuilder::new().build(items)
}

// ============================================================================
// Tests
// ============================================================================
