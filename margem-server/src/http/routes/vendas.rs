//! Sale ingestion endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::http::error::{ApiError, StoreOp};
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewSale, SaleSubmission};

/// Acknowledgement sent after a sale is stored
pub const SALE_SAVED_MESSAGE: &str = "Venda salva com sucesso!";

/// Created sale response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

/// POST /vendas - record one sale
async fn create_sale(
    State(state): State<Arc<AppState>>,
    ValidJson(submission): ValidJson<SaleSubmission>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let sale = NewSale::try_from(submission)?;

    let id = state
        .store
        .insert(&sale, Utc::now())
        .await
        .map_err(ApiError::storage(StoreOp::Insert))?;
    tracing::debug!(id, franquia = sale.franquia(), "Sale recorded");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: SALE_SAVED_MESSAGE,
        }),
    ))
}

/// Sale routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/vendas", post(create_sale))
}
