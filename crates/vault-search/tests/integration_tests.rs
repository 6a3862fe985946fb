//! Integration test suite for Vault search.
//!
//! Drives the public API the way a presentation layer would: load a
//! collection, click through the keyword panel, type a query, and read back
//! both panels.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
