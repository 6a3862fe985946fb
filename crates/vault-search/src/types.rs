//! Query and option types shared by the filter and the controller.

use serde::{Deserialize, Serialize};
use vault_keywords::KeywordPath;

/// What the user is currently looking for.
///
/// Both constraints are optional; an empty `text` and no `selected_path`
/// lets every item through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Case-insensitive substring query. Empty means no text filtering.
    #[serde(default)]
    pub text: String,

    /// Keyword node constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_path: Option<KeywordPath>,
}

impl FilterQuery {
    /// The query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the keyword constraint from a raw path.
    ///
    /// A path that normalizes to empty is the root ("all items") and leaves
    /// the constraint unset.
    pub fn with_selected_path(mut self, path: &str) -> Self {
        let path = KeywordPath::parse(path);
        self.selected_path = (!path.is_empty()).then_some(path);
        self
    }

    /// Whether text filtering is active.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Whether keyword filtering is active.
    pub fn has_selection(&self) -> bool {
        self.selected_path.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Whether the query lets every item through.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && !self.has_selection()
    }
}

/// How clearing the text query interacts with the keyword selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Text and keyword constraints are fully independent.
    #[default]
    Independent,
    /// Setting the text to empty also clears the keyword selection.
    /// Clearing the selection never touches the text.
    ClearOnEmptyText,
}

/// Controller options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Text/selection coupling.
    #[serde(default)]
    pub selection_policy: SelectionPolicy,

    /// Skip tree rebuilds when the item keywords have not changed.
    #[serde(default = "default_true")]
    pub memoize_tree: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            memoize_tree: default_true(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_default_is_empty() {
        let query = FilterQuery::new();
        assert!(query.is_empty());
        assert!(!query.has_text());
        assert!(!query.has_selection());
    }

    #[test]
    fn test_filter_query_builders() {
        let query = FilterQuery::new().with_text("pass").with_selected_path(" admin / id ");
        assert!(query.has_text());
        assert_eq!(query.selected_path.unwrap().join(), "admin/id");
    }

    #[test]
    fn test_root_selection_is_no_selection() {
        let query = FilterQuery::new().with_selected_path("///");
        assert!(query.selected_path.is_none());
        assert!(query.is_empty());
    }

    #[test]
    fn test_filter_query_serialization() {
        let query = FilterQuery::new().with_selected_path("work");
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"text":"","selected_path":"work"}"#);

        let minimal: FilterQuery = serde_json::from_str(r#"{"text":"rib"}"#).unwrap();
        assert_eq!(minimal.text, "rib");
        assert!(minimal.selected_path.is_none());
    }

    #[test]
    fn test_selection_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&SelectionPolicy::ClearOnEmptyText).unwrap(),
            "\"clear_on_empty_text\""
        );
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::Independent);
    }

    #[test]
    fn test_search_options_defaults() {
        let options: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SearchOptions::default());
        assert!(options.memoize_tree);
        assert_eq!(options.selection_policy, SelectionPolicy::Independent);
    }
}
