//! Storage layer - one interface, swappable backends
//!
//! # Design Principles
//!
//! - Handlers only see `Arc<dyn SaleStore>`, injected through axum state
//! - The backend owns record identity and never trusts client ids
//! - Aggregation is a single GROUP BY query (no per-franchise round trips)
//! - Schema migrations are idempotent and run when a store is opened

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod sqlite;
pub mod url;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{FranchiseSummary, NewSale};

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use sqlite::SqliteStore;
pub use url::StoreUrl;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unsupported database url '{0}' (expected memory, sqlite: or postgres://)")]
    UnsupportedUrl(String),
}

/// Persistence for sale records (testable)
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Create the schema if it does not exist yet.
    async fn migrate(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Persist one sale stamped with `at`, returning the assigned id.
    async fn insert(&self, sale: &NewSale, at: DateTime<Utc>) -> Result<i64, StoreError>;

    /// Sum margins and count sales per franchise.
    ///
    /// Row order is unspecified.
    async fn summarize(&self) -> Result<Vec<FranchiseSummary>, StoreError>;
}

/// Open the store named by `database_url` and bring its schema up to date.
///
/// # Example
///
/// ```ignore
/// let store = open_store("sqlite::memory:").await?;
/// let id = store.insert(&sale, Utc::now()).await?;
/// ```
pub async fn open_store(database_url: &str) -> Result<Arc<dyn SaleStore>, StoreError> {
    let store: Arc<dyn SaleStore> = match StoreUrl::parse(database_url)? {
        StoreUrl::Memory => Arc::new(MemoryStore::new()),
        StoreUrl::Sqlite(url) => Arc::new(SqliteStore::connect(&url).await?),
        StoreUrl::Postgres(url) => Arc::new(PgStore::connect(&url).await?),
    };

    store.migrate().await?;
    tracing::info!(backend = store.backend(), "Sale store ready");

    Ok(store)
}
