//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the aggregation work. Every request recomputes its
//! payload from the immutable dataset; nothing is cached between calls.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{DashboardData, HealthResponse, RangeQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DatasetInfo, MonthlyData, RankingData};
use crate::models::{DateRange, RentalRecord};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and a dataset is
/// loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: format!("{} records", state.dataset.len()),
    }))
}

// =============================================================================
// Dataset
// =============================================================================

/// GET /v1/dataset
///
/// Summary of the loaded dataset: row count, date bounds, and checksum.
/// The frontend uses the bounds to constrain its date picker.
pub async fn get_dataset_info(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    let info = state.dataset.info()?;
    Ok(Json(info))
}

// =============================================================================
// Dashboard Endpoints
// =============================================================================

/// GET /v1/dashboard
///
/// Full dashboard payload: one recompute of every visualization over the
/// selected window.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<DashboardData> {
    let (range, records) = select_window(&state, &query)?;

    let monthly = services::compute_monthly_data(&records);
    let seasons = services::compute_season_data(&records);
    let weather = services::compute_weathersit_data(&records);
    let total_orders = monthly.metrics.total_orders;

    Ok(Json(DashboardData {
        range,
        total_orders,
        monthly,
        seasons,
        weather,
    }))
}

/// GET /v1/dashboard/monthly
///
/// Monthly order-count trend over the selected window.
pub async fn get_monthly(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<MonthlyData> {
    let (_, records) = select_window(&state, &query)?;
    Ok(Json(services::compute_monthly_data(&records)))
}

/// GET /v1/dashboard/seasons
///
/// Rental volume ranked by season over the selected window.
pub async fn get_seasons(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<RankingData> {
    let (_, records) = select_window(&state, &query)?;
    Ok(Json(services::compute_season_data(&records)))
}

/// GET /v1/dashboard/weather
///
/// Rental volume ranked by weather condition over the selected window.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<RankingData> {
    let (_, records) = select_window(&state, &query)?;
    Ok(Json(services::compute_weathersit_data(&records)))
}

/// Resolve the requested window and slice the dataset to it.
fn select_window(
    state: &AppState,
    query: &RangeQuery,
) -> Result<(DateRange, Vec<RentalRecord>), AppError> {
    let range = state
        .dataset
        .resolve_range(query.start_date, query.end_date)?;
    let records = state.dataset.slice(range);
    Ok((range, records))
}
