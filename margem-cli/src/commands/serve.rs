//! HTTP server command
//!
//! Opens the configured store and serves `/vendas` and `/historico`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use margem_server::{open_store, run_server, ServerConfig, StoreUrl, DEFAULT_ALLOWED_ORIGINS};

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MARGEM_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Browser origin allowed by CORS (repeatable, or comma separated in the env var)
    #[arg(
        long = "allowed-origin",
        env = "MARGEM_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_ALLOWED_ORIGINS.map(String::from)
    )]
    pub allowed_origins: Vec<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let url = StoreUrl::parse(&args.store.database_url).context("Invalid DATABASE_URL")?;
    if url.is_ephemeral() {
        tracing::warn!(
            backend = url.backend(),
            "Using an in-memory store; sales are lost when the server stops"
        );
    }

    let allowed_origins = ServerConfig::parse_origins(&args.allowed_origins)
        .context("Invalid --allowed-origin")?;

    tracing::info!("Starting margem server on {}", args.bind);

    let store = open_store(&args.store.database_url)
        .await
        .context("Failed to open sale store")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        allowed_origins,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
