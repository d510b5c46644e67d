//! Calendar feature derivation over raw rental records.
//!
//! # Modules
//!
//! - [`enricher`]: parse timestamps and derive year, month, hour, weekday
//!   and the day-period bucket

pub mod enricher;

pub use enricher::{derive_records, ParseError, DATETIME_FORMAT};
