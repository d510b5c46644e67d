//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/filters", get(handlers::get_filter_options))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/charts/hourly", get(handlers::get_hourly_chart))
        .route("/charts/monthly", get(handlers::get_monthly_chart))
        .route("/charts/working-day", get(handlers::get_working_day_chart))
        .route("/charts/day-period", get(handlers::get_day_period_chart))
        .route("/charts/weather", get(handlers::get_weather_chart))
        .route("/charts/correlation", get(handlers::get_correlation_chart));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
