//! The filter predicate builder.

use crate::models::{DerivedRecord, FilterSelection, WorkingDayChoice};

fn matches_working_day(record: &DerivedRecord, choice: WorkingDayChoice) -> bool {
    match choice {
        WorkingDayChoice::All => true,
        WorkingDayChoice::Working => record.workingday,
        WorkingDayChoice::NonWorking => !record.workingday,
    }
}

/// Apply the current selection to the derived dataset.
///
/// The predicate is the AND of four independent dimensions: year membership,
/// season membership, the inclusive hour range and the working-day
/// tri-state. All four are evaluated against the same selection snapshot.
/// An empty year or season list matches nothing, and an inverted hour range
/// is an empty interval rather than an error.
pub fn apply_filters(
    records: &[DerivedRecord],
    selection: &FilterSelection,
) -> Vec<DerivedRecord> {
    records
        .iter()
        .filter(|r| {
            selection.years.contains(&r.year)
                && selection.seasons.contains(&r.season)
                && selection.hours.contains(r.hour)
                && matches_working_day(r, selection.working_day)
        })
        .cloned()
        .collect()
}
