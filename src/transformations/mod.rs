//! Filtering of the derived dataset.
//!
//! # Modules
//!
//! - [`filtering`]: the compositional filter predicate over years, seasons,
//!   working-day status and the hour range

pub mod filtering;

pub use filtering::apply_filters;
