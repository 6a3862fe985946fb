//! Command implementations.
//!
//! Each command is split into a function that computes its output (tested
//! directly) and the dispatch in [`run`] that prints it.

use std::path::Path;

use vault_core::{CreateItemInput, Item, ItemStore};
use vault_keywords::path::parse_keyword_list;
use vault_search::SearchController;
use vault_storage::{save_items_async, MemoryItemStore, SnapshotLoader};

use crate::cli::{Cli, Command};
use crate::config::VaultConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use crate::render::{render_items, render_tree};

/// Runs a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        items: items_path,
        command,
        ..
    } = cli;

    if let Command::Config { action } = command {
        return Ok(handle_config_command(config_path.as_deref(), action)?);
    }

    let config = VaultConfig::load(config_path.as_deref())?.with_items_path(items_path);
    tracing::debug!(items = %config.items_path.display(), "Resolved configuration");

    match command {
        Command::Tree {
            expand,
            all,
            select,
        } => {
            let mut controller = load_controller(&config).await?;
            print!(
                "{}",
                tree_output(&mut controller, &expand, all, select.as_deref(), config.tree.indent)
            );
        }
        Command::Search {
            text,
            keyword,
            json,
        } => {
            let mut controller = load_controller(&config).await?;
            let total = controller.items().len();
            let visible = search(&mut controller, text.as_deref(), keyword.as_deref());
            if json {
                let out = serde_json::to_string_pretty(&visible).map_err(vault_core::Error::from)?;
                println!("{out}");
            } else {
                print!("{}", render_items(&visible));
                eprintln!("{} of {total} items", visible.len());
            }
        }
        Command::Items { query } => {
            println!("{}", items_json(&config, query.as_deref()).await?);
        }
        Command::Add {
            title,
            content,
            keywords,
        } => {
            let item = add_item(&config, title, content, &keywords).await?;
            println!("{}", item.id);
        }
        Command::Config { .. } => {}
    }

    Ok(())
}

/// Reads the configured snapshot.
pub async fn load_items(config: &VaultConfig) -> Result<Vec<Item>> {
    let (items, stats) = SnapshotLoader::new(&config.items_path)
        .with_error_handling(config.snapshot.on_error)
        .load_async()
        .await?;
    if stats.entries_skipped > 0 {
        log::warn!(
            "Skipped {} invalid entries in {}",
            stats.entries_skipped,
            config.items_path.display()
        );
    }
    Ok(items)
}

/// Builds a controller over the configured snapshot.
pub async fn load_controller(config: &VaultConfig) -> Result<SearchController> {
    let items = load_items(config).await?;
    let mut controller = SearchController::with_options(items, config.search.options());
    if config.tree.expand_all {
        controller.expand_all();
    }
    Ok(controller)
}

/// Keyword panel for `vault tree`.
///
/// Each `--expand` path is expanded together with its ancestors so that its
/// children show up.
pub fn tree_output(
    controller: &mut SearchController,
    expand: &[String],
    all: bool,
    select: Option<&str>,
    indent: usize,
) -> String {
    if all {
        controller.expand_all();
    }
    for path in expand {
        controller.expand_to(path);
        if !controller.navigator().is_expanded(path) {
            controller.toggle_expand(path);
        }
    }
    if select.is_some() {
        controller.select(select);
        if controller.selection_is_orphaned() {
            log::warn!("Keyword {:?} is not in the tree", select.unwrap_or_default());
        }
    }
    render_tree(controller, indent)
}

/// Visible items for `vault search`.
pub fn search<'a>(
    controller: &'a mut SearchController,
    text: Option<&str>,
    keyword: Option<&str>,
) -> Vec<&'a Item> {
    controller.set_text(text.unwrap_or_default());
    controller.select(keyword);
    if controller.selection_is_orphaned() {
        log::warn!("Keyword {:?} is not in the tree", keyword.unwrap_or_default());
    }
    controller.visible_items()
}

/// JSON for `vault items`: the store's list, or its text search.
pub async fn items_json(config: &VaultConfig, query: Option<&str>) -> Result<String> {
    let store = MemoryItemStore::with_items(load_items(config).await?);
    let items = match query {
        Some(query) => store.search(query).await?,
        None => store.list().await?,
    };
    Ok(serde_json::to_string_pretty(&items).map_err(vault_core::Error::from)?)
}

/// Appends a text item to the snapshot, creating the file if needed.
pub async fn add_item(
    config: &VaultConfig,
    title: Option<String>,
    content: Option<String>,
    keywords: &str,
) -> Result<Item> {
    let existing = if snapshot_exists(&config.items_path) {
        load_items(config).await?
    } else {
        Vec::new()
    };
    let store = MemoryItemStore::with_items(existing);

    let item = store
        .create(CreateItemInput {
            title,
            content,
            keywords: parse_keyword_list(keywords),
            ..Default::default()
        })
        .await?;

    save_items_async(&config.items_path, &store.list().await?).await?;
    log::info!("Added item {} to {}", item.id, config.items_path.display());
    Ok(item)
}

fn snapshot_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
