//! HTTP handlers for the REST API.
//!
//! Each handler maps the shared chart query to a filter selection, runs the
//! pipeline on the immutable dataset and serializes one (or all) of the
//! chart payloads.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    self, ChartQuery, ChartResponse, CorrelationResponse, DashboardResponse,
    FilterOptionsResponse, HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{DayPeriod, FilterSelection};
use crate::services::{aggregates, correlation, dashboard};
use crate::transformations;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn resolve_selection(query: ChartQuery, state: &AppState) -> Result<FilterSelection, AppError> {
    query
        .into_selection(state.dataset.options())
        .map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        rows: state.dataset.len(),
    })
}

// =============================================================================
// Filter options
// =============================================================================

/// GET /v1/filters
///
/// The selectable filter values in the loaded dataset.
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    Json(state.dataset.options().into())
}

// =============================================================================
// Dashboard (all charts in one pass)
// =============================================================================

/// GET /v1/dashboard
///
/// Every chart payload computed from a single filtered view.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<DashboardResponse> {
    let selection = resolve_selection(query, &state)?;
    let data = dashboard::compute_dashboard(state.dataset.records(), &selection);
    Ok(Json(data.into()))
}

// =============================================================================
// Individual chart endpoints
// =============================================================================

/// GET /v1/charts/hourly
pub async fn get_hourly_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartResponse<u32>> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(ChartResponse {
        matched_records: view.len(),
        points: dto::to_points(aggregates::mean_by_hour(&view)),
    }))
}

/// GET /v1/charts/monthly
pub async fn get_monthly_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartResponse<u32>> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(ChartResponse {
        matched_records: view.len(),
        points: dto::to_points(aggregates::mean_by_month(&view)),
    }))
}

/// GET /v1/charts/working-day
pub async fn get_working_day_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartResponse<String>> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(ChartResponse {
        matched_records: view.len(),
        points: dto::to_working_day_points(aggregates::mean_by_working_day(&view)),
    }))
}

/// GET /v1/charts/day-period
pub async fn get_day_period_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartResponse<DayPeriod>> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(ChartResponse {
        matched_records: view.len(),
        points: dto::to_points(aggregates::mean_by_day_period(&view)),
    }))
}

/// GET /v1/charts/weather
pub async fn get_weather_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartResponse<u8>> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(ChartResponse {
        matched_records: view.len(),
        points: dto::to_points(aggregates::mean_by_weather(&view)),
    }))
}

/// GET /v1/charts/correlation
pub async fn get_correlation_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<CorrelationResponse> {
    let selection = resolve_selection(query, &state)?;
    let view = transformations::apply_filters(state.dataset.records(), &selection);
    Ok(Json(CorrelationResponse {
        matched_records: view.len(),
        correlation: correlation::correlation_matrix(&view).into(),
    }))
}
