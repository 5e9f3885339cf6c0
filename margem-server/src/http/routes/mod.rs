//! Route handlers organized by resource

pub mod health;
pub mod historico;
pub mod vendas;

#[cfg(test)]
pub(crate) mod testing {
    //! Router harness shared by the route tests

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use chrono::{DateTime, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::db::{MemoryStore, SaleStore, StoreError};
    use crate::http::server::{build_router, AppState, ServerConfig};
    use crate::models::{FranchiseSummary, NewSale};

    /// Store whose every operation fails, for 500 paths
    pub struct FailingStore;

    #[async_trait]
    impl SaleStore for FailingStore {
        fn backend(&self) -> &'static str {
            "failing"
        }

        async fn insert(&self, _sale: &NewSale, _at: DateTime<Utc>) -> Result<i64, StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::Protocol(
                "relation \"vendas\" does not exist".into(),
            )))
        }

        async fn summarize(&self) -> Result<Vec<FranchiseSummary>, StoreError> {
            Err(StoreError::Sqlx(sqlx::Error::PoolClosed))
        }
    }

    pub fn app_with(store: Arc<dyn SaleStore>) -> Router {
        build_router(AppState::new(store), &ServerConfig::default())
    }

    pub fn app() -> Router {
        app_with(Arc::new(MemoryStore::new()))
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }
}
