//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use margem_server::{open_store, StoreUrl};

use super::StoreArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Create the `vendas` table in the configured database and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let url = StoreUrl::parse(&args.store.database_url).context("Invalid DATABASE_URL")?;
    if url.is_ephemeral() {
        tracing::warn!(
            backend = url.backend(),
            "Migrating an in-memory store has no lasting effect"
        );
    }

    // open_store applies migrations before returning
    let store = open_store(&args.store.database_url)
        .await
        .context("Failed to migrate sale store")?;

    println!("Schema up to date ({})", store.backend());
    Ok(())
}
