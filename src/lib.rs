//! # Bike-Share Insights Backend
//!
//! Analysis engine behind the bike-share rentals dashboard. The crate loads
//! the rentals CSV once at startup, derives calendar features from each
//! observation, and serves filtered aggregate chart data to the
//! visualization frontend over a small REST API.
//!
//! ## Pipeline
//!
//! ```text
//! CSV file -> parsing -> Vec<Record> -> preprocessing -> Vec<DerivedRecord>
//!          -> [selection] -> transformations::filtering -> filtered view
//!          -> services (group means, correlation matrix) -> JSON payloads
//! ```
//!
//! The derived dataset is computed once and shared immutably; every request
//! recomputes the filtered view and its aggregates in full. The stages are
//! pure synchronous functions, so everything below the HTTP layer is
//! directly unit-testable.
//!
//! ## Architecture
//!
//! - [`models`]: domain types (records, day-period buckets, filter selection)
//! - [`parsing`]: CSV ingestion into typed records
//! - [`preprocessing`]: calendar feature derivation
//! - [`transformations`]: the compositional filter predicate
//! - [`services`]: aggregation engine and dashboard assembly
//! - [`dataset`]: startup load and the immutable in-memory handle
//! - [`http`]: axum-based REST server for the frontend

pub mod dataset;
pub mod http;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod transformations;
