//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with an `error` field. Storage
//! failures are logged in full and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// Returned when any of the four business fields is absent
pub const MISSING_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios.";

/// Storage operation that failed, selects the client-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Insert,
    Summarize,
}

impl StoreOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Insert => "Erro ao salvar venda.",
            Self::Summarize => "Erro ao consultar histórico.",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Store failed (500, logged)
    Storage { op: StoreOp, source: StoreError },
}

impl ApiError {
    pub fn storage(op: StoreOp) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Storage { op, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) if matches!(e, ValidationError::Missing { .. }) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": MISSING_FIELDS_MESSAGE,
                    "field": e.field(),
                    "message": e.to_string()
                }),
            ),
            Self::Validation(e) => {
                let mut body = json!({ "error": e.to_string() });
                if let Some(field) = e.field() {
                    body["field"] = json!(field);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            Self::Storage { op, source } => {
                // Log the actual error, return generic message
                tracing::error!(operation = ?op, "Storage error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": op.failure_message() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
