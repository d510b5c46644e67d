use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::models::Record;

/// Integer-coded columns (categorical codes and rental counts).
const INT_COLUMNS: [&str; 7] = [
    "season",
    "holiday",
    "workingday",
    "weather",
    "casual",
    "registered",
    "count",
];

/// Continuous covariate columns.
const FLOAT_COLUMNS: [&str; 4] = ["temp", "atemp", "humidity", "windspeed"];

/// Parse the rentals CSV file into a Polars DataFrame.
///
/// Column types are pinned explicitly: inference may land on i64 or f64
/// depending on formatting (e.g. `humidity` has no decimal point), so every
/// column is cast to its expected type. A missing required column fails the
/// cast and aborts the load.
pub fn parse_rentals_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    let mut lazy_df = df.lazy();

    // datetime stays a string; chrono parses it during feature derivation
    lazy_df = lazy_df.with_column(col("datetime").cast(DataType::String));

    for col_name in INT_COLUMNS {
        lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Int64));
    }
    for col_name in FLOAT_COLUMNS {
        lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Float64));
    }

    lazy_df
        .collect()
        .context("Failed to cast columns to expected types")
}

/// Convert a rentals DataFrame to typed [`Record`]s.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<Record>> {
    let height = df.height();

    let datetimes = df.column("datetime")?.str()?;
    let seasons = df.column("season")?.i64()?;
    let holidays = df.column("holiday")?.i64()?;
    let workingdays = df.column("workingday")?.i64()?;
    let weathers = df.column("weather")?.i64()?;
    let temps = df.column("temp")?.f64()?;
    let atemps = df.column("atemp")?.f64()?;
    let humidities = df.column("humidity")?.f64()?;
    let windspeeds = df.column("windspeed")?.f64()?;
    let casuals = df.column("casual")?.i64()?;
    let registereds = df.column("registered")?.i64()?;
    let counts = df.column("count")?.i64()?;

    let mut records = Vec::with_capacity(height);

    for i in 0..height {
        let datetime = datetimes
            .get(i)
            .with_context(|| format!("Missing datetime at row {}", i))?
            .to_string();
        let season = seasons
            .get(i)
            .with_context(|| format!("Missing season at row {}", i))?;
        let holiday = holidays
            .get(i)
            .with_context(|| format!("Missing holiday at row {}", i))?;
        let workingday = workingdays
            .get(i)
            .with_context(|| format!("Missing workingday at row {}", i))?;
        let weather = weathers
            .get(i)
            .with_context(|| format!("Missing weather at row {}", i))?;
        let temp = temps
            .get(i)
            .with_context(|| format!("Missing temp at row {}", i))?;
        let atemp = atemps
            .get(i)
            .with_context(|| format!("Missing atemp at row {}", i))?;
        let humidity = humidities
            .get(i)
            .with_context(|| format!("Missing humidity at row {}", i))?;
        let windspeed = windspeeds
            .get(i)
            .with_context(|| format!("Missing windspeed at row {}", i))?;
        let casual = casuals
            .get(i)
            .with_context(|| format!("Missing casual at row {}", i))?;
        let registered = registereds
            .get(i)
            .with_context(|| format!("Missing registered at row {}", i))?;
        let count = counts
            .get(i)
            .with_context(|| format!("Missing count at row {}", i))?;

        records.push(Record {
            datetime,
            season: season as u8,
            holiday: holiday != 0,
            workingday: workingday != 0,
            weather: weather as u8,
            temp,
            atemp,
            humidity,
            windspeed,
            casual: casual as u32,
            registered: registered as u32,
            count: count as u32,
        });
    }

    Ok(records)
}

/// Load the rentals CSV and convert it to typed records in one step.
pub fn load_rentals_csv(csv_path: &Path) -> Result<Vec<Record>> {
    let df = parse_rentals_csv(csv_path)?;
    dataframe_to_records(&df)
}
