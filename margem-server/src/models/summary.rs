//! Per-franchise aggregation row

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Margin totals for one franchise, as served by `GET /historico`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FranchiseSummary {
    pub franquia: String,
    /// Sum of `margem_valor` over the franchise's sales
    pub total_margem: f64,
    /// Number of recorded sales
    pub total_vendas: i64,
}
