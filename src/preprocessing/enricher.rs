//! The feature deriver: raw records in, derived records out.

use chrono::{Datelike, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::models::{DayPeriod, DerivedRecord, Record};

/// Timestamp format used by the rentals CSV.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An unparseable record timestamp.
///
/// Derivation aborts on the first bad row; records are never dropped
/// silently, so the dashboard fails visibly instead of showing wrong data.
#[derive(Debug, Error)]
#[error("row {row}: invalid datetime '{value}': {source}")]
pub struct ParseError {
    /// Zero-based row index into the loaded records.
    pub row: usize,
    /// The offending datetime string.
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Derive calendar features for every record.
///
/// Pure and deterministic: each record's timestamp is parsed with
/// [`DATETIME_FORMAT`], then year, month, hour, weekday (0 = Monday, the
/// pandas `dt.weekday` convention) and the day-period bucket are extracted.
pub fn derive_records(records: &[Record]) -> Result<Vec<DerivedRecord>, ParseError> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let datetime = NaiveDateTime::parse_from_str(&record.datetime, DATETIME_FORMAT)
                .map_err(|source| ParseError {
                    row,
                    value: record.datetime.clone(),
                    source,
                })?;
            Ok(enrich(record, datetime))
        })
        .collect()
}

fn enrich(record: &Record, datetime: NaiveDateTime) -> DerivedRecord {
    let hour = datetime.hour();
    DerivedRecord {
        datetime,
        season: record.season,
        holiday: record.holiday,
        workingday: record.workingday,
        weather: record.weather,
        temp: record.temp,
        atemp: record.atemp,
        humidity: record.humidity,
        windspeed: record.windspeed,
        casual: record.casual,
        registered: record.registered,
        count: record.count,
        year: datetime.year(),
        month: datetime.month(),
        hour,
        weekday: datetime.weekday().num_days_from_monday(),
        day_period: DayPeriod::from_hour(hour),
    }
}
