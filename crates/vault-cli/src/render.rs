//! Plain-text rendering of the two panels.
//!
//! The keyword panel looks like:
//!
//! ```text
//!   All Items (3)
//! > - admin (2)
//!       bank (1)
//!     + id (1)
//!     work (1)
//! ```
//!
//! `>` marks the selected row (the header when nothing is selected), `+` a
//! collapsed node with children, `-` an expanded one.

use vault_core::Item;
use vault_keywords::path::format_keyword_list;
use vault_search::SearchController;

const SELECTED: &str = "> ";
const UNSELECTED: &str = "  ";

/// Renders the "All Items" header and the visible keyword rows.
pub fn render_tree(controller: &SearchController, indent: usize) -> String {
    let mut out = String::new();
    let header_marker = if controller.navigator().selected_path.is_none() {
        SELECTED
    } else {
        UNSELECTED
    };
    out.push_str(&format!(
        "{header_marker}All Items ({})\n",
        controller.all_items_count()
    ));

    for row in controller.visible_nodes() {
        let marker = if row.is_selected { SELECTED } else { UNSELECTED };
        let toggle = match (row.has_children(), row.is_expanded) {
            (false, _) => "  ",
            (true, false) => "+ ",
            (true, true) => "- ",
        };
        out.push_str(&format!(
            "{marker}{:pad$}{toggle}{} ({})\n",
            "",
            row.node.segment(),
            row.count(),
            pad = row.depth * indent
        ));
    }

    out
}

/// One line per item: id, title, keywords.
pub fn render_items(items: &[&Item]) -> String {
    let mut out = String::new();
    for item in items {
        let title = item.title.as_deref().unwrap_or("(untitled)");
        let keywords = format_keyword_list(&item.keywords);
        let line = if keywords.is_empty() {
            format!("{}\t{title}\n", item.id)
        } else {
            format!("{}\t{title}\t[{keywords}]\n", item.id)
        };
        out.push_str(&line);
    }
    out
}
