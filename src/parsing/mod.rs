//! CSV ingestion for the rentals dataset.
//!
//! The source file is the hourly bike-share rentals CSV (`train.csv`). It is
//! read into a Polars DataFrame, columns are pinned to the expected types,
//! and each row is converted into a typed [`crate::models::Record`].
//!
//! Ingestion is fail-fast: a missing column or value aborts the load rather
//! than producing a partial dataset.

pub mod csv_parser;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{dataframe_to_records, load_rentals_csv, parse_rentals_csv};
