//! Axum-based HTTP server exposing the pipeline to the dashboard frontend.
//!
//! The frontend owns all widgets and chart drawing; this layer only maps
//! query parameters to a [`crate::models::FilterSelection`], runs one
//! pipeline pass and serializes the aggregation results.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
