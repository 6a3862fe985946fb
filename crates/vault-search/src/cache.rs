//! Keyword tree memoization.
//!
//! The tree depends only on each item's id and raw keywords, so the cache
//! fingerprints exactly those fields. Edits to titles, content or timestamps
//! leave the fingerprint alone and the cached tree is reused.
//!
//! # Fingerprint
//!
//! A blake3 hash over, for each item in input order:
//! - the id, length-prefixed
//! - the keyword count, then each keyword length-prefixed
//!
//! Length prefixes keep `["a/b"]` and `["a", "/b"]` apart. Reordering the
//! collection changes the fingerprint; that costs a rebuild, never a stale
//! tree.

use vault_core::Item;
use vault_keywords::{BuildStats, KeywordTreeBuilder, KeywordTreeNode};

/// Hex-encoded fingerprint of the tree-relevant parts of `items`.
pub fn content_hash(items: &[Item]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(items.len() as u64).to_le_bytes());
    for item in items {
        update_str(&mut hasher, item.id.as_str());
        hasher.update(&(item.keywords.len() as u64).to_le_bytes());
        for keyword in &item.keywords {
            update_str(&mut hasher, keyword);
        }
    }
    hasher.finalize().to_hex().to_string()
}

fn update_str(hasher: &mut blake3::Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Holds the current keyword tree and rebuilds it only when needed.
#[derive(Debug, Clone)]
pub struct TreeCache {
    memoize: bool,
    tree: KeywordTreeNode,
    hash: Option<String>,
    stats: BuildStats,
    builds: usize,
}

impl TreeCache {
    /// Creates an empty cache.
    ///
    /// With `memoize` off every [`refresh`](Self::refresh) rebuilds.
    pub fn new(memoize: bool) -> Self {
        Self {
            memoize,
            tree: KeywordTreeNode::root(),
            hash: None,
            stats: BuildStats::default(),
            builds: 0,
        }
    }

    /// Brings the tree in line with `items`.
    ///
    /// Returns `true` when the tree was rebuilt.
    pub fn refresh(&mut self, items: &[Item]) -> bool {
        let hash = content_hash(items);
        if self.memoize && self.hash.as_deref() == Some(hash.as_str()) {
            log::trace!("Keyword tree is fresh ({hash})");
            return false;
        }

        let (tree, stats) = KeywordTreeBuilder::new().build_with_stats(items);
        self.tree = tree;
        self.stats = stats;
        self.hash = Some(hash);
        self.builds += 1;
        true
    }

    /// Refreshes, then returns the tree.
    pub fn get_or_build(&mut self, items: &[Item]) -> &KeywordTreeNode {
        self.refresh(items);
        &self.tree
    }

    /// The tree as of the last refresh.
    pub fn tree(&self) -> &KeywordTreeNode {
        &self.tree
    }

    /// Stats of the last build.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Fingerprint of the last build, `None` before the first one.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Number of builds performed so far.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    /// Whether unchanged input skips the rebuild.
    pub fn is_memoized(&self) -> bool {
        self.memoize
    }

    /// Drops the fingerprint so the next refresh rebuilds.
    pub fn invalidate(&mut self) {
        self.hash = None;
    }
}

impl Default for TreeCache {
    fn default() -> Self {
        Self::new(true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::text("1").with_title("Passport").with_keywords(["admin/id"]),
            Item::text("2").with_title("Payslip").with_keywords(["work/pay"]),
        ]
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(content_hash(&items()), content_hash(&items()));
        assert_eq!(content_hash(&items()).len(), 64);
    }

    #[test]
    fn test_hash_ignores_titles_and_content() {
        let mut edited = items();
        edited[0].title = Some("Passeport".into());
        edited[1].content = Some("new body".into());
        assert_eq!(content_hash(&items()), content_hash(&edited));
    }

    #[test]
    fn test_hash_tracks_keywords_and_ids() {
        let mut edited = items();
        edited[0].keywords.push("travel".into());
        assert_ne!(content_hash(&items()), content_hash(&edited));

        let mut renamed = items();
        renamed[1].id = "3".into();
        assert_ne!(content_hash(&items()), content_hash(&renamed));
    }

    #[test]
    fn test_hash_separates_keyword_boundaries() {
        let joined = vec![Item::text("1").with_keywords(["a/b"])];
        let split = vec![Item::text("1").with_keywords(["a", "/b"])];
        assert_ne!(content_hash(&joined), content_hash(&split));
    }

    #[test]
    fn test_memoized_cache_skips_unchanged_input() {
        let mut cache = TreeCache::new(true);
        assert!(cache.refresh(&items()));
        assert!(!cache.refresh(&items()));
        assert_eq!(cache.build_count(), 1);
        assert_eq!(cache.tree().count(), 2);
    }

    #[test]
    fn test_memoized_cache_rebuilds_on_keyword_change() {
        let mut cache = TreeCache::default();
        cache.refresh(&items());

        let mut edited = items();
        edited[1].keywords = vec!["admin/bank".into()];
        assert!(cache.refresh(&edited));
        assert_eq!(cache.tree().find_str("admin").unwrap().count(), 2);
        assert!(cache.tree().find_str("work").is_none());
    }

    #[test]
    fn test_unmemoized_cache_always_rebuilds() {
        let mut cache = TreeCache::new(false);
        cache.refresh(&items());
        cache.refresh(&items());
        assert_eq!(cache.build_count(), 2);
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let mut cache = TreeCache::new(true);
        cache.refresh(&items());
        cache.invalidate();
        assert!(cache.hash().is_none());
        assert!(cache.refresh(&items()));
    }

    #[test]
    fn test_get_or_build_and_stats() {
        let mut cache = TreeCache::new(true);
        let root = cache.get_or_build(&items());
        assert_eq!(root.child_count(), 2);
        assert_eq!(cache.stats().items_indexed, 2);
        assert_eq!(cache.stats().nodes_created, 4);
    }
}
