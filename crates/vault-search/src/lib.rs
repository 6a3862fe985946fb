//! Item filtering and search orchestration for Vault.
//!
//! Combines a free-text query with a keyword-tree selection to decide which
//! items are visible, and keeps the keyword tree in step with the item
//! collection.
//!
//! # Modules
//!
//! - [`types`]: [`FilterQuery`], [`SelectionPolicy`] and [`SearchOptions`]
//! - [`filter`]: [`ItemFilter`], the text + keyword matcher
//! - [`cache`]: [`TreeCache`], content-hash memoization of tree builds
//! - [`controller`]: [`SearchController`], which ties everything together
//!
//! # Example
//!
//! ```rust
//! use vault_core::Item;
//! use vault_search::SearchController;
//!
//! let mut controller = SearchController::new(vec![
//!     Item::text("1").with_title("Passport").with_keywords(["admin/id"]),
//!     Item::text("2").with_title("Payslip").with_keywords(["work/pay"]),
//! ]);
//!
//! controller.select(Some("admin"));
//! let visible: Vec<&str> = controller
//!     .visible_items()
//!     .iter()
//!     .map(|item| item.id.as_str())
//!     .collect();
//! assert_eq!(visible, vec!["1"]);
//! ```

pub mod cache;
pub mod controller;
pub mod filter;
pub mod types;

mod proptests;

pub use cache::{content_hash, TreeCache};
pub use controller::{SearchController, SearchView};
pub use filter::{apply, matches_keyword, matches_text, ItemFilter};
pub use types::{FilterQuery, SearchOptions, SelectionPolicy};
