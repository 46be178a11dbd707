use pretty_assertions::assert_eq;
use rstest::rstest;
use sales_forecast::{DataLoader, ForecastError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_canonical_csv() {
    let csv = "date,sales\n2024-01-01,100\n2024-01-02,120\n2024-01-03,130";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), vec![100.0, 120.0, 130.0]);
    assert_eq!(
        series.last_date().unwrap().to_string(),
        "2024-01-03".to_string()
    );
}

#[rstest]
#[case("ds", "y")]
#[case("order_date", "revenue")]
#[case("day", "amount")]
#[case("timestamp", "weekly_sales")]
#[case("DATE", "SALES")]
#[case(" Date ", " Value ")]
fn test_header_aliases_equivalent(#[case] date_header: &str, #[case] value_header: &str) {
    let reference = DataLoader::from_csv_str(
        "date,sales\n2024-01-01,100\n2024-01-02,120\n2024-01-03,130",
    )
    .unwrap();

    let csv = format!(
        "{},{}\n2024-01-01,100\n2024-01-02,120\n2024-01-03,130",
        date_header, value_header
    );
    let series = DataLoader::from_csv_str(&csv).unwrap();

    assert_eq!(series, reference);
}

#[test]
fn test_first_recognized_alias_wins() {
    // Both `date` and `ds` are present; the first column in order is used
    let csv = "ds,date,sales\n2024-01-01,1999-12-31,100\n2024-01-02,1999-12-31,120";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.last_date().unwrap().to_string(), "2024-01-02");
}

#[test]
fn test_extra_columns_ignored() {
    let csv = "store,date,region,sales\nA,2024-01-01,north,100\nB,2024-01-02,south,120";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.values(), vec![100.0, 120.0]);
}

#[test]
fn test_missing_columns_is_schema_error() {
    let csv = "foo,bar\n1,2\n3,4";
    let result = DataLoader::from_csv_str(csv);

    match result {
        Err(ForecastError::SchemaError(message)) => {
            assert!(message.contains("foo"), "message should list found columns");
        }
        other => panic!("expected SchemaError, got {:?}", other),
    }
}

#[test]
fn test_empty_input_is_schema_error() {
    let result = DataLoader::from_csv_str("");
    assert!(matches!(result, Err(ForecastError::SchemaError(_))));
}

#[test]
fn test_malformed_rows_dropped() {
    let csv = "date,sales\n\
               2024-01-01,100\n\
               not-a-date,110\n\
               2024-01-03,abc\n\
               2024-01-04,\n\
               2024-01-05,130";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.values(), vec![100.0, 130.0]);
}

#[test]
fn test_rows_sorted_by_date() {
    let csv = "date,sales\n2024-01-03,130\n2024-01-01,100\n2024-01-02,120";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.values(), vec![100.0, 120.0, 130.0]);
}

#[test]
fn test_mixed_date_formats() {
    let csv = "date,sales\n2024-01-01,100\n01/02/2024,110\n2024/01/03,120";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), vec![100.0, 110.0, 120.0]);
}

#[test]
fn test_currency_values_coerced() {
    let csv = "date,sales\n2024-01-01,\"$1,250.50\"\n2024-01-02,980";
    let series = DataLoader::from_csv_str(csv).unwrap();

    assert_eq!(series.values(), vec![1250.5, 980.0]);
}

#[test]
fn test_from_csv_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Sales").unwrap();
    writeln!(file, "2024-01-01,100.0").unwrap();
    writeln!(file, "2024-01-02,120.0").unwrap();
    writeln!(file, "2024-01-03,130.0").unwrap();

    let series = DataLoader::from_csv_path(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
}

#[test]
fn test_from_csv_path_missing_file() {
    let result = DataLoader::from_csv_path("nonexistent_file.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}
