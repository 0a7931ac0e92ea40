//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

use super::AppState;
use super::types::{AnalyticsQuery, ErrorResponse};
use crate::catalog::{AiSuggestion, Alert, FinancialData};
use crate::sim::metrics::ReadingRequest;
use crate::views::{
    AnalyticsRange, DashboardSnapshot, DataStatus, DepartmentOverview, FormattedRollup,
};

fn bad_request(err: impl ToString) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err)))
}

/// `GET /dashboard` → 200 + `DashboardSnapshot` JSON
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.engine.dashboard_snapshot())
}

/// `GET /analytics?range=7d|30d|90d` → 200 + `AnalyticsView` JSON
/// `GET /analytics?range=1y` → 400 + `ErrorResponse`
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnalyticsQuery>,
) -> impl IntoResponse {
    let range = query
        .range
        .as_deref()
        .unwrap_or(AnalyticsRange::default().as_str());
    match state.engine.analytics_for(range) {
        Ok(view) => Ok(Json(view)),
        Err(err) => {
            debug!(%err, "rejected analytics query");
            Err(bad_request(err))
        }
    }
}

/// `GET /rollup` → 200 + `FormattedRollup` JSON
pub async fn get_rollup(State(state): State<Arc<AppState>>) -> Json<FormattedRollup> {
    Json(state.engine.formatted_rollup())
}

pub async fn get_departments(State(state): State<Arc<AppState>>) -> Json<Vec<DepartmentOverview>> {
    Json(state.engine.departments())
}

pub async fn get_suggestions(State(state): State<Arc<AppState>>) -> Json<Vec<AiSuggestion>> {
    Json(state.engine.suggestions())
}

pub async fn get_alerts(State(state): State<Arc<AppState>>) -> Json<Vec<Alert>> {
    Json(state.engine.alerts())
}

pub async fn get_financial(State(state): State<Arc<AppState>>) -> Json<FinancialData> {
    Json(state.engine.financial_data())
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<DataStatus> {
    Json(state.engine.data_status())
}

/// `POST /readings/price` → 200 + `PricedReading` JSON, 400 on unknown
/// department or invalid consumption.
pub async fn price_reading(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReadingRequest>,
) -> impl IntoResponse {
    state
        .engine
        .price_reading(&request)
        .map(Json)
        .map_err(bad_request)
}
