//! In-process store
//!
//! Keeps every record in a `Vec` behind a tokio `RwLock`. Used for tests
//! and for `DATABASE_URL=memory`; nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{SaleStore, StoreError};
use crate::models::{FranchiseSummary, NewSale, SaleRecord};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    records: Vec<SaleRecord>,
}

/// Memory-backed [`SaleStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<SaleRecord> {
        self.inner.read().await.records.clone()
    }
}

#[async_trait]
impl SaleStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, sale: &NewSale, at: DateTime<Utc>) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.records.push(SaleRecord::new(id, sale, at));
        Ok(id)
    }

    async fn summarize(&self) -> Result<Vec<FranchiseSummary>, StoreError> {
        let inner = self.inner.read().await;

        let mut groups: BTreeMap<&str, (f64, i64)> = BTreeMap::new();
        for record in &inner.records {
            let entry = groups.entry(record.franquia.as_str()).or_default();
            entry.0 += record.margem_valor;
            entry.1 += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(franquia, (total_margem, total_vendas))| FranchiseSummary {
                franquia: franquia.to_owned(),
                total_margem,
                total_vendas,
            })
            .collect())
    }
}
