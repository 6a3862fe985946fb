//! Property-based tests for tree building and navigation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use vault_core::{Item, ItemId};

    use crate::builder::build_tree;
    use crate::navigator::NavigatorState;
    use crate::path::{join, normalize, KeywordPath};
    use crate::tree::KeywordTreeNode;

    fn raw_keyword() -> impl Strategy<Value = String> {
        // Small alphabet so paths overlap; spaces and slashes exercise
        // normalization.
        "[ab /]{0,8}"
    }

    fn items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(prop::collection::vec(raw_keyword(), 0..4), 0..12).prop_map(
            |keyword_lists| {
                keyword_lists
                    .into_iter()
                    .enumerate()
                    .map(|(i, keywords)| Item::text(i.to_string()).with_keywords(keywords))
                    .collect()
            },
        )
    }

    fn assert_children_contained(node: &KeywordTreeNode) {
        for child in node.children() {
            assert!(child.items().is_subset(node.items()));
            assert!(child.count() <= node.count());
            assert_eq!(child.path().parent().as_ref(), Some(node.path()));
            assert_children_contained(child);
        }
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(raw in "\\PC{0,24}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&join(&once)), once.clone());
            prop_assert!(once.iter().all(|s| !s.is_empty() && s.trim() == s.as_str()));
        }

        #[test]
        fn test_root_counts_items_with_a_real_keyword(items in items()) {
            let root = build_tree(&items);
            let expected: BTreeSet<ItemId> = items
                .iter()
                .filter(|item| item.keywords.iter().any(|k| !normalize(k).is_empty()))
                .map(|item| item.id.clone())
                .collect();
            prop_assert_eq!(root.items(), &expected);
        }

        #[test]
        fn test_parents_contain_children(items in items()) {
            let root = build_tree(&items);
            assert_children_contained(&root);
        }

        #[test]
        fn test_every_keyword_path_is_reachable(items in items()) {
            let root = build_tree(&items);
            for item in &items {
                for raw in &item.keywords {
                    let path = KeywordPath::parse(raw);
                    if path.is_empty() {
                        continue;
                    }
                    let node = root.find(&path).unwrap();
                    prop_assert!(node.contains(&item.id));
                }
            }
        }

        #[test]
        fn test_toggle_pair_restores_state(
            items in items(),
            expanded in prop::collection::vec(raw_keyword(), 0..4),
            target in raw_keyword(),
        ) {
            let root = build_tree(&items);
            let mut state = NavigatorState::new();
            for path in &expanded {
                state.toggle_expand(path);
            }
            let before = state.clone();
            let rows_before = state.visible_nodes(&root).len();

            state.toggle_expand(&target);
            state.toggle_expand(&target);

            prop_assert_eq!(&state, &before);
            prop_assert_eq!(state.visible_nodes(&root).len(), rows_before);
        }

        #[test]
        fn test_fully_expanded_rows_match_walk(items in items()) {
            let root = build_tree(&items);
            let mut state = NavigatorState::new();
            state.expand_all(&root);

            let rows: Vec<&str> = state
                .visible_nodes(&root)
                .iter()
                .map(|row| row.node.full_path())
                .collect();
            let walked: Vec<&str> = root.walk().map(|(node, _)| node.full_path()).collect();
            prop_assert_eq!(rows, walked);
        }
    }
}
