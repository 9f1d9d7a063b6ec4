//! Descriptive statistics over a numeric field.

use std::cmp::Ordering;

use crate::error::{StatsError, StatsResult};
use crate::types::DataSet;

/// Sample standard deviation, or the reason it is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StdDev {
    /// Sample standard deviation (divisor `n - 1`).
    Sample(f64),
    /// Fewer than two values were available.
    InsufficientData { count: usize },
}

impl StdDev {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Sample(v) => Some(v),
            Self::InsufficientData { .. } => None,
        }
    }
}

/// Summary of the present values of one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of present values aggregated.
    pub count: usize,
    pub mean: f64,
    /// 50th percentile; the two middle values are averaged for even counts.
    pub median: f64,
    pub std: StdDev,
    pub min: f64,
    pub max: f64,
}

/// Mean, median and sample standard deviation of `field`.
///
/// Absent values are excluded from aggregation (never treated as zero).
///
/// Errors:
///
/// - [`StatsError::EmptyInput`] when the dataset has no records, or none has a value for `field`
/// - [`StatsError::UnknownField`] / [`StatsError::FieldTypeError`] when `field` is not numeric
pub fn descriptive_stats(dataset: &DataSet, field: &str) -> StatsResult<DescriptiveStats> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyInput {
            context: format!("no records to describe for field '{field}'"),
        });
    }
    let values = dataset.numeric_values(field)?;
    if values.is_empty() {
        return Err(StatsError::EmptyInput {
            context: format!("every value of field '{field}' is absent"),
        });
    }
    describe(&values)
}

/// Descriptive statistics for a slice of values.
pub fn describe(values: &[f64]) -> StatsResult<DescriptiveStats> {
    let n = values.len();
    if n == 0 {
        return Err(StatsError::EmptyInput {
            context: "no values to describe".to_string(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mean = values.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let std = if n > 1 {
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        StdDev::Sample(variance.sqrt())
    } else {
        StdDev::InsufficientData { count: n }
    };

    Ok(DescriptiveStats {
        count: n,
        mean,
        median,
        std,
        min: sorted[0],
        max: sorted[n - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::{describe, descriptive_stats, StdDev};
    use crate::error::StatsError;
    use crate::types::{DataSet, DataType, Field, Record, Schema, Value};

    fn prices(values: Vec<Value>) -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Name", DataType::Utf8),
            Field::new("Price", DataType::Float64),
        ]);
        let records = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Record::new(vec![Value::Utf8(format!("item-{i}")), v]))
            .collect();
        DataSet::new(schema, records)
    }

    #[test]
    fn even_count_interpolates_median() {
        let stats = describe(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 2.5).abs() < 1e-12);
        assert!((stats.median - 2.5).abs() < 1e-12);
        let std = stats.std.value().unwrap();
        assert!((std - 1.290_994_4).abs() < 1e-6);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn odd_count_takes_middle_value() {
        let stats = describe(&[10.0, 1.0, 7.0]).unwrap();
        assert_eq!(stats.median, 7.0);
    }

    #[test]
    fn single_value_reports_insufficient_data() {
        let stats = describe(&[42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.std, StdDev::InsufficientData { count: 1 });
        assert_eq!(stats.std.value(), None);
    }

    #[test]
    fn absent_values_are_excluded_not_zero() {
        let ds = prices(vec![
            Value::Float64(1.0),
            Value::Absent,
            Value::Float64(3.0),
        ]);
        let stats = descriptive_stats(&ds, "Price").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn integer_fields_are_numeric() {
        let schema = Schema::new(vec![Field::new("Warranty Period", DataType::Int64)]);
        let ds = DataSet::new(
            schema,
            vec![
                Record::new(vec![Value::Int64(12)]),
                Record::new(vec![Value::Int64(24)]),
            ],
        );
        let stats = descriptive_stats(&ds, "Warranty Period").unwrap();
        assert_eq!(stats.mean, 18.0);
    }

    #[test]
    fn empty_dataset_and_all_absent_are_empty_input() {
        let ds = prices(vec![]);
        assert!(matches!(
            descriptive_stats(&ds, "Price"),
            Err(StatsError::EmptyInput { .. })
        ));

        let ds = prices(vec![Value::Absent, Value::Absent]);
        assert!(matches!(
            descriptive_stats(&ds, "Price"),
            Err(StatsError::EmptyInput { .. })
        ));
    }

    #[test]
    fn text_field_is_field_type_error() {
        let ds = prices(vec![Value::Float64(1.0)]);
        assert_eq!(
            descriptive_stats(&ds, "Name").unwrap_err(),
            StatsError::FieldTypeError {
                field: "Name".to_string(),
                data_type: DataType::Utf8
            }
        );
    }
}
