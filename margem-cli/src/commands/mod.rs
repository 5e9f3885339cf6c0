//! Command implementations for the margem CLI

pub mod migrate;
pub mod serve;

use clap::Args;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// SQLite in memory, the same store the service always started with
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Store selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Database URL: memory, sqlite:<path>, sqlite::memory: or postgres://...
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}
