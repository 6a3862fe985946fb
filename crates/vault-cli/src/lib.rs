//! # vault-cli
//!
//! The `vault` command-line tool: browse the keyword tree of an item
//! snapshot, filter it by text and keyword, and manage the config file.
//!
//! - [`cli`]: clap argument definitions
//! - [`config`]: [`VaultConfig`] loading and defaults
//! - [`config_handlers`]: `vault config` subcommands
//! - [`commands`]: `tree`, `search`, `items` and `add`
//! - [`render`]: plain-text panel rendering
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod render;

pub use cli::{Cli, Command, ConfigAction};
pub use config::VaultConfig;
pub use error::{Error, Result};
