//! margem-server: sales margin recording over HTTP
//!
//! Records sale entries (franchise, project value, margin value, margin
//! percentage) and serves per-franchise margin totals. Persistence goes
//! through the [`db::SaleStore`] trait so the HTTP layer never knows which
//! backend it talks to.

pub mod db;
pub mod http;
pub mod models;

pub use db::{open_store, SaleStore, StoreError, StoreUrl};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, DEFAULT_ALLOWED_ORIGINS};
pub use models::{FranchiseSummary, NewSale, SaleRecord, SaleSubmission, ValidationError};
