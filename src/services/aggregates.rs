//! Group-mean aggregations over the filtered view.

use std::collections::BTreeMap;

use crate::models::{DayPeriod, DerivedRecord};

/// Partition `records` by `key` and compute the arithmetic mean of the
/// rental count per group.
///
/// Groups with no members are simply absent from the map; consumers must
/// treat a missing key as "no data", which is distinct from a mean of zero.
/// An empty view yields an empty map.
pub fn group_mean<K, F>(records: &[DerivedRecord], key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    F: Fn(&DerivedRecord) -> K,
{
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(key(record)).or_insert((0.0, 0));
        entry.0 += record.count as f64;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Mean rentals per hour of day (line chart, x = 0-23).
pub fn mean_by_hour(records: &[DerivedRecord]) -> BTreeMap<u32, f64> {
    group_mean(records, |r| r.hour)
}

/// Mean rentals per month (line chart with markers, x = 1-12).
pub fn mean_by_month(records: &[DerivedRecord]) -> BTreeMap<u32, f64> {
    group_mean(records, |r| r.month)
}

/// Mean rentals on non-working (false) vs working (true) days (bar chart).
pub fn mean_by_working_day(records: &[DerivedRecord]) -> BTreeMap<bool, f64> {
    group_mean(records, |r| r.workingday)
}

/// Mean rentals per day-period bucket (bar chart, chronological order).
pub fn mean_by_day_period(records: &[DerivedRecord]) -> BTreeMap<DayPeriod, f64> {
    group_mean(records, |r| r.day_period)
}

/// Mean rentals per weather category (bar chart).
pub fn mean_by_weather(records: &[DerivedRecord]) -> BTreeMap<u8, f64> {
    group_mean(records, |r| r.weather)
}
