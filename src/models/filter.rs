//! Filter selection state and the selectable options.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::DerivedRecord;

/// Tri-state working-day filter, mirroring the dashboard's radio control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingDayChoice {
    #[default]
    All,
    Working,
    NonWorking,
}

impl FromStr for WorkingDayChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WorkingDayChoice::All),
            "working" => Ok(WorkingDayChoice::Working),
            "non-working" | "non_working" | "nonworking" => Ok(WorkingDayChoice::NonWorking),
            other => Err(format!(
                "invalid working-day choice '{}': expected 'all', 'working' or 'non-working'",
                other
            )),
        }
    }
}

impl fmt::Display for WorkingDayChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkingDayChoice::All => "All",
            WorkingDayChoice::Working => "Working",
            WorkingDayChoice::NonWorking => "Non-working",
        };
        f.write_str(label)
    }
}

/// Closed hour-of-day interval `[lo, hi]`, matching the dashboard's slider.
///
/// An inverted range (`lo > hi`) is a valid, genuinely empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub lo: u32,
    pub hi: u32,
}

impl HourRange {
    /// The whole day, the slider's default position.
    pub const FULL_DAY: HourRange = HourRange { lo: 0, hi: 23 };

    pub fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, hour: u32) -> bool {
        self.lo <= hour && hour <= self.hi
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

/// The user's current filter selection across all four dimensions.
///
/// An empty `years` or `seasons` list matches nothing; it is an empty
/// membership set, not "no filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub years: Vec<i32>,
    pub seasons: Vec<u8>,
    pub working_day: WorkingDayChoice,
    pub hours: HourRange,
}

impl FilterSelection {
    /// Selection that matches every record of a dataset with the given
    /// options, the dashboard's initial state.
    pub fn all_of(options: &FilterOptions) -> Self {
        Self {
            years: options.years.clone(),
            seasons: options.seasons.clone(),
            working_day: WorkingDayChoice::All,
            hours: HourRange::FULL_DAY,
        }
    }
}

/// The selectable filter values present in the loaded dataset. Served to the
/// frontend so its multi-selects can default to everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct season codes, ascending.
    pub seasons: Vec<u8>,
    pub hour_min: u32,
    pub hour_max: u32,
}

impl FilterOptions {
    pub fn from_records(records: &[DerivedRecord]) -> Self {
        let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
        let seasons: BTreeSet<u8> = records.iter().map(|r| r.season).collect();
        Self {
            years: years.into_iter().collect(),
            seasons: seasons.into_iter().collect(),
            hour_min: 0,
            hour_max: 23,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::record::DayPeriod;

    fn record(year: i32, season: u8) -> DerivedRecord {
        let datetime = NaiveDate::from_ymd_opt(year, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        DerivedRecord {
            datetime,
            season,
            holiday: false,
            workingday: true,
            weather: 1,
            temp: 20.0,
            atemp: 22.0,
            humidity: 50.0,
            windspeed: 10.0,
            casual: 5,
            registered: 10,
            count: 15,
            year,
            month: 6,
            hour: 10,
            weekday: 2,
            day_period: DayPeriod::Morning,
        }
    }

    #[test]
    fn test_working_day_choice_from_str() {
        assert_eq!("all".parse::<WorkingDayChoice>(), Ok(WorkingDayChoice::All));
        assert_eq!(
            "Working".parse::<WorkingDayChoice>(),
            Ok(WorkingDayChoice::Working)
        );
        assert_eq!(
            "Non-working".parse::<WorkingDayChoice>(),
            Ok(WorkingDayChoice::NonWorking)
        );
        assert_eq!(
            "non_working".parse::<WorkingDayChoice>(),
            Ok(WorkingDayChoice::NonWorking)
        );
        assert!("weekend".parse::<WorkingDayChoice>().is_err());
    }

    #[test]
    fn test_hour_range_contains_is_inclusive() {
        let range = HourRange::new(6, 18);
        assert!(!range.contains(5));
        assert!(range.contains(6));
        assert!(range.contains(18));
        assert!(!range.contains(19));
    }

    #[test]
    fn test_inverted_hour_range_is_empty() {
        let range = HourRange::new(10, 5);
        assert!((0..24).all(|h| !range.contains(h)));
    }

    #[test]
    fn test_filter_options_sorted_distinct() {
        let records = vec![
            record(2012, 3),
            record(2011, 1),
            record(2012, 1),
            record(2011, 3),
        ];
        let options = FilterOptions::from_records(&records);
        assert_eq!(options.years, vec![2011, 2012]);
        assert_eq!(options.seasons, vec![1, 3]);
        assert_eq!(options.hour_min, 0);
        assert_eq!(options.hour_max, 23);
    }

    #[test]
    fn test_all_of_matches_options() {
        let options = FilterOptions::from_records(&[record(2011, 2)]);
        let selection = FilterSelection::all_of(&options);
        assert_eq!(selection.years, vec![2011]);
        assert_eq!(selection.seasons, vec![2]);
        assert_eq!(selection.working_day, WorkingDayChoice::All);
        assert_eq!(selection.hours, HourRange::FULL_DAY);
    }
}
