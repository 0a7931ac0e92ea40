//! REST API over the engine's query views.
//!
//! Read-only GET endpoints mirror the dashboard pages; `POST /readings/price`
//! prices a caller-supplied reading without touching the store.

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::sim::engine::Engine;

pub use types::{AnalyticsQuery, ErrorResponse};

/// Immutable application state shared across all request handlers.
///
/// The engine is built once before serving; handlers only read from it.
pub struct AppState {
    pub engine: Engine,
}

impl AppState {
    pub fn new(engine: Engine) -> Arc<Self> {
        Arc::new(Self { engine })
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/analytics", get(handlers::get_analytics))
        .route("/rollup", get(handlers::get_rollup))
        .route("/departments", get(handlers::get_departments))
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/alerts", get(handlers::get_alerts))
        .route("/financial", get(handlers::get_financial))
        .route("/status", get(handlers::get_status))
        .route("/readings/price", post(handlers::price_reading))
        .with_state(state)
}

/// Binds to `addr` and serves the API until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
