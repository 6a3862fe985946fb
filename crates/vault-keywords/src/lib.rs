//! Hierarchical keyword indexing for Vault.
//!
//! Items carry slash-delimited keyword paths such as
//! `administratif/papier/passport`. This crate turns a flat item collection
//! into a navigable prefix tree with per-node item counts.
//!
//! # Modules
//!
//! - [`path`]: Keyword normalization and the [`KeywordPath`] type
//! - [`tree`]: The immutable [`KeywordTreeNode`] prefix tree
//! - [`builder`]: [`KeywordTreeBuilder`], which folds items into a tree
//! - [`navigator`]: Expansion/selection state and the visible row list
//!
//! # Example
//!
//! ```rust
//! use vault_core::Item;
//! use vault_keywords::build_tree;
//!
//! let items = vec![
//!     Item::text("1").with_title("Passport").with_keywords(["admin/id"]),
//!     Item::text("2").with_title("Payslip").with_keywords(["work/pay"]),
//! ];
//!
//! let root = build_tree(&items);
//! assert_eq!(root.count(), 2);
//! assert_eq!(root.find_str("admin").map(|n| n.count()), Some(1));
//! ```

pub mod builder;
pub mod navigator;
pub mod path;
pub mod tree;

mod proptests;

pub use builder::{build_tree, BuildStats, KeywordTreeBuilder};
pub use navigator::{visible_nodes, NavigatorState, VisibleNode};
pub use path::{join, normalize, KeywordPath};
pub use tree::KeywordTreeNode;
