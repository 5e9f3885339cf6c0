//! PostgreSQL store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::pool::create_pool;
use super::{SaleStore, StoreError};
use crate::models::{FranchiseSummary, NewSale};

/// Postgres-backed [`SaleStore`]
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect without touching the schema; call `migrate` before use.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        Ok(Self::new(create_pool(database_url).await?))
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        tracing::debug!("Running postgres migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vendas (
                id BIGSERIAL PRIMARY KEY,
                franquia TEXT NOT NULL,
                valor_projeto DOUBLE PRECISION NOT NULL,
                margem_valor DOUBLE PRECISION NOT NULL,
                margem_percentual DOUBLE PRECISION NOT NULL,
                data TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert(&self, sale: &NewSale, at: DateTime<Utc>) -> Result<i64, StoreError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO vendas (franquia, valor_projeto, margem_valor, margem_percentual, data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(sale.franquia())
        .bind(sale.valor_projeto())
        .bind(sale.margem_valor())
        .bind(sale.margem_percentual())
        .bind(at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn summarize(&self) -> Result<Vec<FranchiseSummary>, StoreError> {
        let rows = sqlx::query_as::<_, FranchiseSummary>(
            r#"
            SELECT franquia,
                   SUM(margem_valor) AS total_margem,
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
