//! Startup data loading and the immutable in-memory dataset handle.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{DerivedRecord, FilterOptions};
use crate::parsing::csv_parser;
use crate::preprocessing;

/// The derived dataset, loaded once at startup and shared read-only by
/// every request.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<DerivedRecord>,
    options: FilterOptions,
}

impl Dataset {
    /// Load the rentals CSV, derive calendar features and precompute the
    /// selectable filter options.
    ///
    /// Any parse failure aborts the load; the server refuses to start on a
    /// bad dataset rather than serving wrong data.
    pub fn load(csv_path: &Path) -> Result<Self> {
        let raw = csv_parser::load_rentals_csv(csv_path)
            .with_context(|| format!("Failed to load rentals from {}", csv_path.display()))?;
        let records = preprocessing::derive_records(&raw)
            .context("Failed to derive calendar features")?;
        let dataset = Self::from_records(records);
        info!(
            rows = dataset.records.len(),
            years = dataset.options.years.len(),
            seasons = dataset.options.seasons.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from already-derived records.
    pub fn from_records(records: Vec<DerivedRecord>) -> Self {
        let options = FilterOptions::from_records(&records);
        Self { records, options }
    }

    pub fn records(&self) -> &[DerivedRecord] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
