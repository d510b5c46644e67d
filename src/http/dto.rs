//! Data Transfer Objects for the HTTP API.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{DayPeriod, FilterOptions, FilterSelection, HourRange, WorkingDayChoice};
use crate::services::correlation::CorrelationMatrix;
use crate::services::dashboard::DashboardData;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Rows in the loaded dataset
    pub rows: usize,
}

/// The selectable filter values, served so the frontend's controls can
/// default to "everything selected".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub years: Vec<i32>,
    pub seasons: Vec<u8>,
    pub hour_min: u32,
    pub hour_max: u32,
}

impl From<&FilterOptions> for FilterOptionsResponse {
    fn from(options: &FilterOptions) -> Self {
        Self {
            years: options.years.clone(),
            seasons: options.seasons.clone(),
            hour_min: options.hour_min,
            hour_max: options.hour_max,
        }
    }
}

/// Query parameters shared by the dashboard and chart endpoints.
///
/// `years` and `seasons` are comma-separated lists. An absent parameter
/// selects every available value (the dashboard's default state); a present
/// but empty one is the empty set and matches nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    pub years: Option<String>,
    pub seasons: Option<String>,
    /// `all`, `working` or `non-working` (case-insensitive)
    pub workingday: Option<String>,
    pub hour_min: Option<u32>,
    pub hour_max: Option<u32>,
}

impl ChartQuery {
    /// Resolve the query against the dataset's options into a full
    /// [`FilterSelection`].
    pub fn into_selection(self, options: &FilterOptions) -> Result<FilterSelection, String> {
        let years = match self.years {
            None => options.years.clone(),
            Some(raw) => parse_list(&raw).map_err(|e| format!("invalid years: {}", e))?,
        };
        let seasons = match self.seasons {
            None => options.seasons.clone(),
            Some(raw) => parse_list(&raw).map_err(|e| format!("invalid seasons: {}", e))?,
        };
        let working_day = match self.workingday {
            None => WorkingDayChoice::All,
            Some(raw) => raw.parse()?,
        };

        let lo = self.hour_min.unwrap_or(options.hour_min);
        let hi = self.hour_max.unwrap_or(options.hour_max);
        if lo > 23 || hi > 23 {
            return Err(format!(
                "hour range must lie within 0-23, got {}-{}",
                lo, hi
            ));
        }
        // lo > hi is a legitimately empty interval, not an error

        Ok(FilterSelection {
            years,
            seasons,
            working_day,
            hours: HourRange::new(lo, hi),
        })
    }
}

fn parse_list<T>(raw: &str) -> Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(|e| format!("'{}': {}", s, e)))
        .collect()
}

/// One point of a chart: group key and the mean rental count for the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanPoint<K> {
    pub key: K,
    pub mean_count: f64,
}

pub(crate) fn to_points<K: Ord + Serialize>(map: BTreeMap<K, f64>) -> Vec<MeanPoint<K>> {
    map.into_iter()
        .map(|(key, mean_count)| MeanPoint { key, mean_count })
        .collect()
}

/// Working-day groups carry the axis labels the dashboard prints. BTreeMap
/// puts false before true, so Non-working charts first.
pub(crate) fn to_working_day_points(map: BTreeMap<bool, f64>) -> Vec<MeanPoint<String>> {
    map.into_iter()
        .map(|(workingday, mean_count)| MeanPoint {
            key: if workingday { "Working" } else { "Non-working" }.to_string(),
            mean_count,
        })
        .collect()
}

/// Correlation matrix payload. Undefined correlations (constant field or a
/// view below two rows) are `null` in the JSON, which the heatmap renders
/// as blank cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrixDto {
    pub fields: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl From<CorrelationMatrix> for CorrelationMatrixDto {
    fn from(matrix: CorrelationMatrix) -> Self {
        Self {
            fields: matrix.fields,
            values: matrix
                .values
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|v| if v.is_nan() { None } else { Some(v) })
                        .collect()
                })
                .collect(),
        }
    }
}

/// Response for a single chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse<K> {
    /// Records in the filtered view; 0 means "no data", not an error
    pub matched_records: usize,
    pub points: Vec<MeanPoint<K>>,
}

/// Response for the correlation heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationResponse {
    pub matched_records: usize,
    pub correlation: CorrelationMatrixDto,
}

/// All six chart payloads from a single pipeline pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_records: usize,
    pub matched_records: usize,
    pub hourly: Vec<MeanPoint<u32>>,
    pub monthly: Vec<MeanPoint<u32>>,
    pub working_day: Vec<MeanPoint<String>>,
    pub day_period: Vec<MeanPoint<DayPeriod>>,
    pub weather: Vec<MeanPoint<u8>>,
    pub correlation: CorrelationMatrixDto,
}

impl From<DashboardData> for DashboardResponse {
    fn from(data: DashboardData) -> Self {
        Self {
            total_records: data.total_records,
            matched_records: data.matched_records,
            hourly: to_points(data.mean_by_hour),
            monthly: to_points(data.mean_by_month),
            working_day: to_working_day_points(data.mean_by_working_day),
            day_period: to_points(data.mean_by_day_period),
            weather: to_points(data.mean_by_weather),
            correlation: data.correlation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions {
            years: vec![2011, 2012],
            seasons: vec![1, 2, 3, 4],
            hour_min: 0,
            hour_max: 23,
        }
    }

    #[test]
    fn test_absent_params_select_everything() {
        let selection = ChartQuery::default().into_selection(&options()).unwrap();
        assert_eq!(selection.years, vec![2011, 2012]);
        assert_eq!(selection.seasons, vec![1, 2, 3, 4]);
        assert_eq!(selection.working_day, WorkingDayChoice::All);
        assert_eq!(selection.hours, HourRange::new(0, 23));
    }

    #[test]
    fn test_explicitly_empty_list_is_empty_set() {
        let query = ChartQuery {
            years: Some(String::new()),
            ..ChartQuery::default()
        };
        let selection = query.into_selection(&options()).unwrap();
        assert!(selection.years.is_empty());
    }

    #[test]
    fn test_comma_separated_lists() {
        let query = ChartQuery {
            years: Some("2012".to_string()),
            seasons: Some("1, 3".to_string()),
            workingday: Some("non-working".to_string()),
            hour_min: Some(6),
            hour_max: Some(18),
        };
        let selection = query.into_selection(&options()).unwrap();
        assert_eq!(selection.years, vec![2012]);
        assert_eq!(selection.seasons, vec![1, 3]);
        assert_eq!(selection.working_day, WorkingDayChoice::NonWorking);
        assert_eq!(selection.hours, HourRange::new(6, 18));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let query = ChartQuery {
            years: Some("20xx".to_string()),
            ..ChartQuery::default()
        };
        assert!(query.into_selection(&options()).is_err());

        let query = ChartQuery {
            workingday: Some("weekend".to_string()),
            ..ChartQuery::default()
        };
        assert!(query.into_selection(&options()).is_err());

        let query = ChartQuery {
            hour_max: Some(24),
            ..ChartQuery::default()
        };
        assert!(query.into_selection(&options()).is_err());
    }

    #[test]
    fn test_inverted_hour_range_is_accepted() {
        let query = ChartQuery {
            hour_min: Some(20),
            hour_max: Some(4),
            ..ChartQuery::default()
        };
        let selection = query.into_selection(&options()).unwrap();
        assert_eq!(selection.hours, HourRange::new(20, 4));
    }

    #[test]
    fn test_working_day_labels_and_order() {
        let mut map = BTreeMap::new();
        map.insert(true, 190.0);
        map.insert(false, 180.0);
        let points = to_working_day_points(map);
        assert_eq!(points[0].key, "Non-working");
        assert_eq!(points[1].key, "Working");
    }

    #[test]
    fn test_nan_correlations_serialize_as_null() {
        let matrix = CorrelationMatrix {
            fields: vec!["a".to_string(), "b".to_string()],
            values: vec![vec![1.0, f64::NAN], vec![f64::NAN, 1.0]],
        };
        let dto: CorrelationMatrixDto = matrix.into();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["values"][0][0], 1.0);
        assert!(json["values"][0][1].is_null());
    }
}
