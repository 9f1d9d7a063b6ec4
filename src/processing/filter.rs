//! Record filtering for [`crate::types::DataSet`].

use chrono::{Datelike, NaiveDate};

use crate::error::{StatsError, StatsResult};
use crate::types::{DataSet, DataType, Record, Value};

/// Returns a new [`DataSet`] containing only records for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_records`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&Record) -> bool,
{
    dataset.filter_records(predicate)
}

/// Records whose numeric `field` lies within `[min, max]` (inclusive), in source order.
///
/// Absent values never match. `min > max` yields an empty dataset, which is not an error.
pub fn filter_by_range(dataset: &DataSet, field: &str, min: f64, max: f64) -> StatsResult<DataSet> {
    let idx = dataset.schema().numeric_index(field)?;
    Ok(dataset.filter_records(|record| {
        record
            .get(idx)
            .and_then(Value::as_f64)
            .is_some_and(|v| min <= v && v <= max)
    }))
}

/// Records whose date `field` lies within `[from, to]` (inclusive), in source order.
///
/// Absent dates never match.
pub fn filter_by_date_range(
    dataset: &DataSet,
    field: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> StatsResult<DataSet> {
    let idx = date_index(dataset, field)?;
    Ok(dataset.filter_records(|record| {
        record
            .get(idx)
            .and_then(Value::as_date)
            .is_some_and(|d| from <= d && d <= to)
    }))
}

/// Records whose date `field` falls in a calendar year strictly after `year`.
pub fn filter_born_after(dataset: &DataSet, field: &str, year: i32) -> StatsResult<DataSet> {
    let idx = date_index(dataset, field)?;
    Ok(dataset.filter_records(|record| {
        record
            .get(idx)
            .and_then(Value::as_date)
            .is_some_and(|d| d.year() > year)
    }))
}

fn date_index(dataset: &DataSet, field: &str) -> StatsResult<usize> {
    let idx = dataset
        .schema()
        .index_of(field)
        .ok_or_else(|| StatsError::UnknownField {
            field: field.to_owned(),
        })?;
    let data_type = dataset.schema().fields[idx].data_type;
    if data_type != DataType::Date {
        return Err(StatsError::FieldTypeError {
            field: field.to_owned(),
            data_type,
        });
    }
    Ok(idx)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{filter, filter_born_after, filter_by_date_range, filter_by_range};
    use crate::error::StatsError;
    use crate::types::{DataSet, DataType, Field, Record, Schema, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Name", DataType::Utf8),
            Field::new("Price", DataType::Float64),
            Field::new("Manufactured Date", DataType::Date),
        ]);

        let records = vec![
            Record::new(vec![
                Value::Utf8("Lamp".to_string()),
                Value::Float64(19.5),
                Value::Date(date(2021, 3, 9)),
            ]),
            Record::new(vec![
                Value::Utf8("Desk".to_string()),
                Value::Float64(120.0),
                Value::Absent,
            ]),
            Record::new(vec![
                Value::Utf8("Chair".to_string()),
                Value::Absent,
                Value::Date(date(2023, 1, 1)),
            ]),
            Record::new(vec![
                Value::Utf8("Shelf".to_string()),
                Value::Float64(50.0),
                Value::Date(date(2022, 12, 31)),
            ]),
        ];

        DataSet::new(schema, records)
    }

    fn names(ds: &DataSet) -> Vec<&str> {
        ds.iter()
            .filter_map(|r| r.get("Name").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn filter_by_predicate_preserves_schema_and_order() {
        let ds = sample_dataset();
        let out = filter(&ds, |r| r.get(0).and_then(Value::as_str).is_some_and(|n| n.len() > 4));
        assert_eq!(out.schema(), ds.schema());
        assert_eq!(names(&out), vec!["Chair", "Shelf"]);
        // Original unchanged
        assert_eq!(ds.row_count(), 4);
    }

    #[test]
    fn range_bounds_are_inclusive_and_absent_never_matches() {
        let ds = sample_dataset();
        let out = filter_by_range(&ds, "Price", 19.5, 50.0).unwrap();
        assert_eq!(names(&out), vec!["Lamp", "Shelf"]);
    }

    #[test]
    fn range_filter_is_idempotent() {
        let ds = sample_dataset();
        let once = filter_by_range(&ds, "Price", 20.0, 200.0).unwrap();
        let twice = filter_by_range(&once, "Price", 20.0, 200.0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn inverted_range_is_empty_not_error() {
        let ds = sample_dataset();
        let out = filter_by_range(&ds, "Price", 100.0, 10.0).unwrap();
        assert_eq!(out.schema(), ds.schema());
        assert!(out.is_empty());
    }

    #[test]
    fn range_filter_rejects_non_numeric_fields() {
        let ds = sample_dataset();
        assert_eq!(
            filter_by_range(&ds, "Name", 0.0, 1.0).unwrap_err(),
            StatsError::FieldTypeError {
                field: "Name".to_string(),
                data_type: DataType::Utf8
            }
        );
        assert!(matches!(
            filter_by_range(&ds, "Weight", 0.0, 1.0),
            Err(StatsError::UnknownField { .. })
        ));
    }

    #[test]
    fn date_range_and_year_filters() {
        let ds = sample_dataset();
        let out = filter_by_date_range(&ds, "Manufactured Date", date(2021, 1, 1), date(2022, 12, 31)).unwrap();
        assert_eq!(names(&out), vec!["Lamp", "Shelf"]);

        let out = filter_born_after(&ds, "Manufactured Date", 2022).unwrap();
        assert_eq!(names(&out), vec!["Chair"]);

        assert!(matches!(
            filter_born_after(&ds, "Price", 2000),
            Err(StatsError::FieldTypeError { .. })
        ));
    }
}
