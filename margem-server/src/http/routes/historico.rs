//! Per-franchise margin history endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::{ApiError, StoreOp};
use crate::http::server::AppState;
use crate::models::FranchiseSummary;

/// GET /historico - margin totals and sale counts per franchise
///
/// Aggregates the whole store on every call. Row order is unspecified.
async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FranchiseSummary>>, ApiError> {
    let rows = state
        .store
        .summarize()
        .await
        .map_err(ApiError::storage(StoreOp::Summarize))?;

    Ok(Json(rows))
}

/// History routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/historico", get(history))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::Router;
    use serde_json::{json, Value};

    use crate::db::{SaleStore, SqliteStore};
    use crate::http::routes::testing::{app, app_with, get, post_json, FailingStore};
    use crate::models::FranchiseSummary;

    fn sale(franquia: &str, margem_valor: f64) -> Value {
        json!({
            "franquia": franquia,
            "valor_projeto": 1000,
            "margem_valor": margem_valor,
            "margem_percentual": 30
        })
    }

    async fn history(app: &Router) -> Vec<FranchiseSummary> {
        let (status, body) = get(app, "/historico").await;
        assert_eq!(status, StatusCode::OK);
        let mut rows: Vec<FranchiseSummary> = serde_json::from_value(body).unwrap();
        rows.sort_by(|a, b| a.franquia.cmp(&b.franquia));
        rows
    }

    #[tokio::test]
    async fn empty_store_returns_empty_list() {
        let (status, body) = get(&app(), "/historico").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn single_sale_scenario() {
        let app = app();
        let (status, _) = post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = get(&app, "/historico").await;
        assert_eq!(
            body,
            json!([{ "franquia": "Unit A", "total_margem": 300.0, "total_vendas": 1 }])
        );
    }

    #[tokio::test]
    async fn each_sale_adds_one_and_its_margin() {
        let app = app();
        post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        let before = history(&app).await;

        post_json(&app, "/vendas", sale("Unit A", 125.5)).await;
        let after = history(&app).await;

        assert_eq!(after[0].total_vendas, before[0].total_vendas + 1);
        assert_eq!(after[0].total_margem, before[0].total_margem + 125.5);
    }

    #[tokio::test]
    async fn distinct_franchises_form_distinct_groups() {
        let app = app();
        post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        post_json(&app, "/vendas", sale("Unit B", 100.0)).await;

        let rows = history(&app).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].franquia, "Unit A");
        assert_eq!(rows[1].franquia, "Unit B");
    }

    #[tokio::test]
    async fn same_franchise_is_summed() {
        let app = app();
        post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        post_json(&app, "/vendas", sale("Unit A", 200.0)).await;

        let rows = history(&app).await;
        assert_eq!(
            rows,
            vec![FranchiseSummary {
                franquia: "Unit A".into(),
                total_margem: 500.0,
                total_vendas: 2,
            }]
        );
    }

    #[tokio::test]
    async fn rejected_sale_does_not_change_history() {
        let app = app();
        post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        let before = history(&app).await;

        let mut incomplete = sale("Unit A", 300.0);
        incomplete.as_object_mut().unwrap().remove("margem_percentual");
        let (status, _) = post_json(&app, "/vendas", incomplete).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(history(&app).await, before);
    }

    #[tokio::test]
    async fn sqlite_backend_serves_the_same_history() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        let app = app_with(Arc::new(store));

        post_json(&app, "/vendas", sale("Unit A", 300.0)).await;
        post_json(&app, "/vendas", sale("Unit B", 40.0)).await;
        post_json(&app, "/vendas", sale("Unit A", 0.0)).await;

        let rows = history(&app).await;
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].total_margem, rows[0].total_vendas), (300.0, 2));
        assert_eq!((rows[1].total_margem, rows[1].total_vendas), (40.0, 1));
    }

    #[tokio::test]
    async fn storage_failure_is_generic_500() {
        let store: Arc<dyn SaleStore> = Arc::new(FailingStore);
        let (status, body) = get(&app_with(store), "/historico").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Erro ao consultar histórico." }));
    }
}
