//! Vault CLI
//!
//! Command-line interface for browsing and searching a vault item snapshot.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use vault_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    vault_cli::logging::init(cli.verbose);

    vault_cli::commands::run(cli).await?;
    Ok(())
}
