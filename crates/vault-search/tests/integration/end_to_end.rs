//! The canonical two-item scenario.

use vault_search::{apply, FilterQuery, SearchController};

use crate::common::{ids, passport_and_payslip};

#[test]
fn test_selecting_admin_shows_only_the_passport() {
    let items = passport_and_payslip();
    let query = FilterQuery::new().with_selected_path("admin");
    assert_eq!(ids(&apply(&items, &query)), vec!["1"]);
}

#[test]
fn test_root_has_admin_and_work() {
    let controller = SearchController::new(passport_and_payslip());
    let top: Vec<(&str, usize)> = controller
        .tree()
        .children()
        .map(|node| (node.segment(), node.count()))
        .collect();
    assert_eq!(top, vec![("admin", 1), ("work", 1)]);
    assert_eq!(controller.all_items_count(), 2);
}

#[test]
fn test_controller_view_for_admin_selection() {
    let mut controller = SearchController::new(passport_and_payslip());
    controller.select(Some("admin"));

    let view = controller.view();
    assert_eq!(ids(&view.visible_items), vec!["1"]);
    assert_eq!(view.query.selected_path.unwrap().join(), "admin");
    let selected: Vec<&str> = view
        .visible_nodes
        .iter()
        .filter(|row| row.is_selected)
        .map(|row| row.node.full_path())
        .collect();
    assert_eq!(selected, vec!["admin"]);
}
