//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse and search a vault item snapshot.
#[derive(Parser, Debug)]
#[command(name = "vault", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "VAULT_CONFIG")]
    pub config: Option<String>,

    /// Item snapshot to read instead of the configured one
    #[arg(long, global = true, env = "VAULT_ITEMS")]
    pub items: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the keyword panel
    Tree {
        /// Expand a keyword path (repeatable)
        #[arg(short, long = "expand", value_name = "PATH")]
        expand: Vec<String>,

        /// Expand every keyword
        #[arg(short, long)]
        all: bool,

        /// Mark a keyword as selected
        #[arg(short, long, value_name = "PATH")]
        select: Option<String>,
    },

    /// List the items matching a text query and/or keyword
    Search {
        /// Case-insensitive text to look for
        text: Option<String>,

        /// Restrict to items under this keyword path
        #[arg(short, long, value_name = "PATH")]
        keyword: Option<String>,

        /// Print matching items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print items as JSON, newest first
    Items {
        /// Only items whose title, content or keywords contain this text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Add a text item to the snapshot
    Add {
        /// Item title
        #[arg(short, long)]
        title: Option<String>,

        /// Item body
        #[arg(long)]
        content: Option<String>,

        /// Comma-separated keywords, e.g. "work/contract, admin"
        #[arg(short, long, default_value = "")]
        keywords: String,
    },

    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `vault config` actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Print one value by dotted key, e.g. `search.memoize_tree`
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Where to write it (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
