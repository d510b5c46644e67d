//! One full pipeline pass: filter once, then aggregate everything.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{DayPeriod, DerivedRecord, FilterSelection};
use crate::services::aggregates;
use crate::services::correlation::{self, CorrelationMatrix};
use crate::transformations;

/// Every chart input on the dashboard, computed from a single filtered view.
///
/// `matched_records == 0` is a valid state (the "no data" dashboard); the
/// aggregate maps are then empty and the correlation matrix is NaN-filled.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Size of the full derived dataset.
    pub total_records: usize,
    /// Size of the filtered view this pass aggregated.
    pub matched_records: usize,
    pub mean_by_hour: BTreeMap<u32, f64>,
    pub mean_by_month: BTreeMap<u32, f64>,
    pub mean_by_working_day: BTreeMap<bool, f64>,
    pub mean_by_day_period: BTreeMap<DayPeriod, f64>,
    pub mean_by_weather: BTreeMap<u8, f64>,
    pub correlation: CorrelationMatrix,
}

/// Recompute the whole dashboard for one filter selection.
///
/// The view is filtered exactly once and every aggregation reads that same
/// snapshot, so no chart can mix stale and fresh selections.
pub fn compute_dashboard(
    records: &[DerivedRecord],
    selection: &FilterSelection,
) -> DashboardData {
    let view = transformations::apply_filters(records, selection);
    debug!(
        total = records.len(),
        matched = view.len(),
        "recomputed filtered view"
    );

    DashboardData {
        total_records: records.len(),
        matched_records: view.len(),
        mean_by_hour: aggregates::mean_by_hour(&view),
        mean_by_month: aggregates::mean_by_month(&view),
        mean_by_working_day: aggregates::mean_by_working_day(&view),
        mean_by_day_period: aggregates::mean_by_day_period(&view),
        mean_by_weather: aggregates::mean_by_weather(&view),
        correlation: correlation::correlation_matrix(&view),
    }
}
