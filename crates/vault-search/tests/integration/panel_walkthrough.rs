//! A longer session against a nested vault.

use vault_search::{SearchController, SearchOptions, SelectionPolicy};

use crate::common::{household, ids};

fn rows(controller: &SearchController) -> Vec<(String, usize, usize)> {
    controller
        .visible_nodes()
        .iter()
        .map(|row| (row.node.full_path().to_string(), row.depth, row.count()))
        .collect()
}

#[test]
fn test_collapsed_panel_lists_top_level_keywords() {
    let controller = SearchController::new(household());
    assert_eq!(controller.all_items_count(), 5);
    assert_eq!(
        rows(&controller),
        vec![
            ("administratif".to_string(), 0, 3),
            ("voiture".to_string(), 0, 1),
            ("voyage".to_string(), 0, 1),
            ("work".to_string(), 0, 2),
        ]
    );
}

#[test]
fn test_drilling_down_narrows_the_item_list() {
    let mut controller = SearchController::new(household());

    controller.activate("administratif");
    assert_eq!(
        ids(&controller.visible_items()),
        vec!["passport", "carte-grise", "rib"]
    );

    controller.activate("administratif/papier");
    assert_eq!(ids(&controller.visible_items()), vec!["passport", "carte-grise"]);
    assert!(
        rows(&controller).contains(&("administratif/papier/voiture".to_string(), 2, 1))
    );

    controller.activate("");
    assert_eq!(controller.visible_items().len(), 6);
}

#[test]
fn test_duplicate_normalized_keywords_count_once() {
    let controller = SearchController::new(household());
    assert_eq!(controller.tree().find_str("work/invoice").unwrap().count(), 1);
}

#[test]
fn test_text_search_reaches_untagged_items() {
    let mut controller = SearchController::new(household());
    controller.set_text("HUNTER");
    assert_eq!(ids(&controller.visible_items()), vec!["wifi"]);

    controller.set_text("papier");
    assert_eq!(ids(&controller.visible_items()), vec!["passport", "carte-grise"]);
}

#[test]
fn test_text_within_selection() {
    let mut controller = SearchController::new(household());
    controller.select(Some("administratif"));
    controller.set_text("carte");
    assert_eq!(ids(&controller.visible_items()), vec!["carte-grise"]);
}

#[test]
fn test_source_ui_coupling_policy() {
    let options = SearchOptions {
        selection_policy: SelectionPolicy::ClearOnEmptyText,
        ..Default::default()
    };
    let mut controller = SearchController::with_options(household(), options);
    controller.select(Some("work"));
    controller.set_text("facture");
    assert_eq!(ids(&controller.visible_items()), vec!["invoice"]);

    controller.set_text("");
    assert!(controller.navigator().selected_path.is_none());
    assert_eq!(controller.visible_items().len(), 6);
}

#[test]
fn test_deleting_the_selected_subtree_orphans_the_selection() {
    let mut controller = SearchController::new(household());
    controller.select(Some("work/contract"));
    assert!(!controller.selection_is_orphaned());

    let remaining = household()
        .into_iter()
        .filter(|item| item.id.as_str() != "contract")
        .collect();
    controller.set_items(remaining);

    assert!(controller.selection_is_orphaned());
    assert!(controller.visible_items().is_empty());
    assert_eq!(
        controller.navigator().selected_path.as_deref(),
        Some("work/contract")
    );
}

#[test]
fn test_expansion_survives_rebuilds() {
    let mut controller = SearchController::new(household());
    controller.toggle_expand("work");
    let mut items = household();
    items.push(vault_core::Item::text("bonus").with_keywords(["work/bonus"]));
    controller.set_items(items);

    let paths: Vec<String> = rows(&controller).into_iter().map(|(path, _, _)| path).collect();
    assert!(paths.contains(&"work/bonus".to_string()));
}
