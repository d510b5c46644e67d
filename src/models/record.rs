//! Rental observation types.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single rental observation as it appears in the source CSV.
///
/// `datetime` is kept as the raw string from the file; parsing happens in
/// [`crate::preprocessing::derive_records`] so a malformed timestamp aborts
/// the load with a row-indexed error instead of being dropped silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Timestamp string, `YYYY-MM-DD HH:MM:SS`.
    pub datetime: String,
    /// Season code (1 = spring, 2 = summer, 3 = fall, 4 = winter).
    pub season: u8,
    /// Whether the day is a holiday.
    pub holiday: bool,
    /// Whether the day is a working day.
    pub workingday: bool,
    /// Weather severity code (1 = clear .. 4 = heavy rain).
    pub weather: u8,
    /// Temperature in Celsius.
    pub temp: f64,
    /// "Feels like" temperature in Celsius.
    pub atemp: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Wind speed.
    pub windspeed: f64,
    /// Rentals by non-registered users in the hour.
    pub casual: u32,
    /// Rentals by registered users in the hour.
    pub registered: u32,
    /// Total rentals in the hour.
    pub count: u32,
}

/// Time-of-day bucket derived from the hour.
///
/// The variants are ordered chronologically, so sorted chart output runs
/// night, morning, afternoon, evening.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Bucket an hour of day: `[0,6)` night, `[6,12)` morning,
    /// `[12,18)` afternoon, everything later evening.
    ///
    /// Total over every hour 0-23; the buckets partition the day with no
    /// gaps or overlaps.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => DayPeriod::Night,
            6..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    /// Lowercase label as shown on the dashboard axis.
    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Night => "night",
            DayPeriod::Morning => "morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::Evening => "evening",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A [`Record`] augmented with the calendar features used for grouping and
/// filtering. Built once at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// Parsed observation timestamp.
    pub datetime: NaiveDateTime,
    pub season: u8,
    pub holiday: bool,
    pub workingday: bool,
    pub weather: u8,
    pub temp: f64,
    pub atemp: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub count: u32,
    /// Calendar year of the observation.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Day of week, 0 = Monday .. 6 = Sunday (pandas `dt.weekday` convention).
    pub weekday: u32,
    /// Time-of-day bucket computed from `hour`.
    pub day_period: DayPeriod,
}
