//! margem CLI - sales margin recording service
//!
//! Entry point for the `margem` binary:
//! - `serve`: run the HTTP API (`POST /vendas`, `GET /historico`)
//! - `migrate`: create the `vendas` table in the configured database

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "margem",
    author,
    version,
    about = "Record sales margins and aggregate them per franchise",
    long_about = "Small HTTP service that stores sale margin entries submitted by the \
                  front end and reports margin totals and sale counts per franchise."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Apply the database schema and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["margem", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 3000);
        assert_eq!(
            args.allowed_origins,
            vec![
                "https://margemcontribuicao.netlify.app".to_string(),
                "http://localhost:8080".to_string(),
            ]
        );
    }

    #[test]
    fn origins_accept_repeats_and_commas() {
        let cli = Cli::try_parse_from([
            "margem",
            "serve",
            "--allowed-origin",
            "http://a.test,http://b.test",
            "--allowed-origin",
            "http://c.test",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.allowed_origins.len(), 3);
    }

    #[test]
    fn database_url_flag_wins() {
        let cli =
            Cli::try_parse_from(["margem", "migrate", "--database-url", "memory"]).unwrap();
        let Commands::Migrate(args) = cli.command else {
            panic!("expected migrate");
        };
        assert_eq!(args.store.database_url, "memory");
    }
}
