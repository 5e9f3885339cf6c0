//! SQLite store
//!
//! Default backend (`sqlite::memory:`). File URLs such as
//! `sqlite://data/margem.db` persist across restarts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::pool::create_sqlite_pool;
use super::{SaleStore, StoreError};
use crate::models::{FranchiseSummary, NewSale};

/// SQLite-backed [`SaleStore`]
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect without touching the schema; call `migrate` before use.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        Ok(Self::new(create_sqlite_pool(database_url).await?))
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        tracing::debug!("Running sqlite migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vendas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                franquia TEXT NOT NULL,
                valor_projeto REAL NOT NULL,
                margem_valor REAL NOT NULL,
                margem_percentual REAL NOT NULL,
                data TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert(&self, sale: &NewSale, at: DateTime<Utc>) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO vendas (franquia, valor_projeto, margem_valor, margem_percentual, data)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(sale.franquia())
        .bind(sale.valor_projeto())
        .bind(sale.margem_valor())
        .bind(sale.margem_percentual())
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn summarize(&self) -> Result<Vec<FranchiseSummary>, StoreError> {
        // CAST keeps the column REAL even when every stored margin is integral
        let rows = sqlx::query_as::<_, FranchiseSummary>(
            r#"
            SELECT franquia,
                   CAST(SUM(margem_valor) AS REAL) AS total_margem,
                   COUNT(*) AS total_vendas
            FROM vendas
            GROUP BY franquia
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
