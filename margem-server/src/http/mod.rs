//! HTTP server layer
//!
//! Axum server with:
//! - CORS restricted to the configured front-end origins
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, StoreOp};
pub use server::{
    build_router, run_server, AppState, ServerConfig, ServerError, DEFAULT_ALLOWED_ORIGINS,
};
