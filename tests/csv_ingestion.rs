use chrono::NaiveDate;

use tabular_records::LoadError;
use tabular_records::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use tabular_records::ingestion::{load, LoadOptions};
use tabular_records::schemas::{electronic_device_schema, employee_schema, person_schema, product_schema};
use tabular_records::types::Value;

fn date(y: i32, m: u32, d: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn load_persons_round_trip_in_file_order() {
    let ds = load("tests/fixtures/persons.csv", &person_schema(), &LoadOptions::default()).unwrap();

    assert_eq!(ds.row_count(), 3);
    assert_eq!(
        ds.records()[0].values(),
        &[
            Value::Utf8("Alice".to_string()),
            Value::Utf8("Smith".to_string()),
            date(1990, 5, 21),
        ]
    );
    let last_names: Vec<_> = ds
        .iter()
        .map(|r| r.get("Last Name").unwrap().to_string())
        .collect();
    assert_eq!(last_names, vec!["Smith", "Jones", "White"]);
}

#[test]
fn load_employees_with_extension_fields() {
    let ds = load("tests/fixtures/employees.csv", &employee_schema(), &LoadOptions::default()).unwrap();
    let bob = ds.record(1).unwrap();
    assert_eq!(bob.get("Job"), Some(&Value::Utf8("Analyst".to_string())));
    assert_eq!(bob.get("Employee ID"), Some(&Value::Int64(102)));
}

#[test]
fn load_allows_reordered_columns() {
    let ds = load("tests/fixtures/devices.csv", &electronic_device_schema(), &LoadOptions::default()).unwrap();
    assert_eq!(
        ds.records()[1].values(),
        &[
            Value::Utf8("Phone".to_string()),
            Value::Float64(799.5),
            date(2023, 6, 1),
            Value::Int64(12),
        ]
    );
}

#[test]
fn missing_file_is_file_not_found() {
    let err = load("tests/fixtures/does_not_exist.csv", &person_schema(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn directory_path_is_file_not_found() {
    let err = ingest_csv_from_path("tests/fixtures", &person_schema(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
}

#[test]
fn header_only_file_is_empty_data() {
    let err = load(
        "tests/fixtures/products_header_only.csv",
        &product_schema(),
        &LoadOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::EmptyData { .. }));
    assert!(err.to_string().contains("products_header_only.csv"));
}

#[test]
fn missing_required_column_is_schema_error_regardless_of_rows() {
    for path in [
        "tests/fixtures/products_missing_price.csv",
        "tests/fixtures/products_missing_price_header_only.csv",
    ] {
        let err = load(path, &product_schema(), &LoadOptions::default()).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, LoadError::SchemaMismatch { .. }), "{path}: {msg}");
        assert!(msg.contains("missing required column 'Price'"));
    }
}

#[test]
fn ragged_rows_are_csv_errors() {
    let input = "Name,Price,Manufactured Date\nLamp,19.5\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr, "inline", &product_schema(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn text_whitespace_is_preserved() {
    let input = "First Name,Last Name,Date of Birth\n Alice , Smith,1990-05-21\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let loaded = ingest_csv_from_reader(&mut rdr, "inline", &person_schema(), &LoadOptions::default()).unwrap();
    let alice = loaded.dataset.record(0).unwrap();
    assert_eq!(alice.get("First Name").and_then(Value::as_str), Some(" Alice "));
    assert_eq!(alice.get("Last Name").and_then(Value::as_str), Some(" Smith"));
}
