#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::{load_rentals_csv, parse_rentals_csv};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "datetime,season,holiday,workingday,weather,temp,atemp,humidity,windspeed,casual,registered,count";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_load_rentals_csv_basic() {
        let csv_content = format!(
            "{}\n\
             2011-01-01 00:00:00,1,0,0,1,9.84,14.395,81,0.0,3,13,16\n\
             2011-01-01 01:00:00,1,0,1,2,9.02,13.635,80,0.0,8,32,40\n",
            HEADER
        );
        let temp_file = create_temp_csv(&csv_content);

        let records = load_rentals_csv(temp_file.path()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.datetime, "2011-01-01 00:00:00");
        assert_eq!(first.season, 1);
        assert!(!first.holiday);
        assert!(!first.workingday);
        assert_eq!(first.weather, 1);
        assert!((first.temp - 9.84).abs() < 1e-9);
        // humidity is written without a decimal point but must land as f64
        assert!((first.humidity - 81.0).abs() < 1e-9);
        assert_eq!(first.casual, 3);
        assert_eq!(first.registered, 13);
        assert_eq!(first.count, 16);

        let second = &records[1];
        assert!(second.workingday);
        assert_eq!(second.weather, 2);
        assert_eq!(second.count, 40);
    }

    #[test]
    fn test_parse_rentals_csv_pins_column_types() {
        let csv_content = format!(
            "{}\n2011-01-01 00:00:00,1,0,0,1,9.84,14.395,81,0.0,3,13,16\n",
            HEADER
        );
        let temp_file = create_temp_csv(&csv_content);

        let df = parse_rentals_csv(temp_file.path()).unwrap();
        assert_eq!(df.height(), 1);
        assert!(df.column("humidity").unwrap().f64().is_ok());
        assert!(df.column("count").unwrap().i64().is_ok());
        assert!(df.column("datetime").unwrap().str().is_ok());
    }

    #[test]
    fn test_missing_column_fails() {
        // no count column
        let csv_content = "datetime,season,holiday,workingday,weather,temp,atemp,humidity,windspeed,casual,registered\n\
                           2011-01-01 00:00:00,1,0,0,1,9.84,14.395,81,0.0,3,13\n";
        let temp_file = create_temp_csv(csv_content);

        assert!(load_rentals_csv(temp_file.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let path = std::path::Path::new("/nonexistent/train.csv");
        assert!(load_rentals_csv(path).is_err());
    }
}
