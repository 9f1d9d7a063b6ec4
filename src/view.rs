//! Column-oriented view of a [`DataSet`] for plotting and other column consumers.
//!
//! Values are already typed, so consumers never re-parse numbers or dates.

use chrono::NaiveDate;

use crate::types::{DataSet, Field, Value};

static ABSENT: Value = Value::Absent;

/// One column of a [`DataSet`]: its field and its values in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView<'a> {
    pub field: &'a Field,
    pub values: Vec<&'a Value>,
}

impl ColumnView<'_> {
    pub fn name(&self) -> &str {
        &self.field.name
    }

    /// Numeric values in record order; `None` for absent or non-numeric cells.
    pub fn as_f64(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.as_f64()).collect()
    }

    /// Date values in record order; `None` for absent or non-date cells.
    pub fn as_dates(&self) -> Vec<Option<NaiveDate>> {
        self.values.iter().map(|v| v.as_date()).collect()
    }
}

impl DataSet {
    /// All columns, in schema order.
    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        self.schema()
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| self.column_at(idx, field))
            .collect()
    }

    /// The named column, if the schema has it.
    pub fn column(&self, name: &str) -> Option<ColumnView<'_>> {
        let idx = self.schema().index_of(name)?;
        Some(self.column_at(idx, &self.schema().fields[idx]))
    }

    fn column_at<'a>(&'a self, idx: usize, field: &'a Field) -> ColumnView<'a> {
        ColumnView {
            field,
            values: self
                .records()
                .iter()
                .map(|record| record.get(idx).unwrap_or(&ABSENT))
                .collect(),
        }
    }
}

#[cfg(feature = "polars")]
mod polars_export {
    use chrono::Datelike;
    use polars::prelude::{Column, DataFrame, NamedFrom, PolarsResult, Series};

    use crate::types::{DataSet, DataType, Value};

    /// `NaiveDate::num_days_from_ce` of 1970-01-01.
    const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

    impl DataSet {
        /// Build a `polars` DataFrame with one column per field.
        ///
        /// Absent values become nulls; date columns use the polars `Date` dtype.
        pub fn to_polars(&self) -> PolarsResult<DataFrame> {
            let mut columns = Vec::with_capacity(self.schema().fields.len());
            for col in self.columns() {
                let name = col.name();
                let series = match col.field.data_type {
                    DataType::Utf8 => {
                        let values: Vec<Option<&str>> = col.values.iter().map(|v| v.as_str()).collect();
                        Series::new(name.into(), values)
                    }
                    DataType::Float64 => Series::new(name.into(), col.as_f64()),
                    DataType::Int64 => {
                        let values: Vec<Option<i64>> = col
                            .values
                            .iter()
                            .map(|v| match v {
                                Value::Int64(i) => Some(*i),
                                _ => None,
                            })
                            .collect();
                        Series::new(name.into(), values)
                    }
                    DataType::Date => {
                        let days: Vec<Option<i32>> = col
                            .as_dates()
                            .into_iter()
                            .map(|d| d.map(|d| d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE))
                            .collect();
                        Series::new(name.into(), days).cast(&polars::prelude::DataType::Date)?
                    }
                };
                columns.push(Column::from(series));
            }
            DataFrame::new(columns)
        }
    }

}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::types::{DataSet, DataType, Field, Record, Schema, Value};

    #[test]
    fn columns_are_keyed_by_name_and_row_ordered() {
        let schema = Schema::new(vec![
            Field::new("Price", DataType::Float64),
            Field::new("Manufactured Date", DataType::Date),
        ]);
        let d = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let ds = DataSet::new(
            schema,
            vec![
                Record::new(vec![Value::Float64(2.0), Value::Absent]),
                Record::new(vec![Value::Absent, Value::Date(d)]),
            ],
        );

        let cols = ds.columns();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].name(), "Price");
        assert_eq!(cols[0].as_f64(), vec![Some(2.0), None]);
        assert_eq!(ds.column("Manufactured Date").unwrap().as_dates(), vec![None, Some(d)]);
        assert!(ds.column("Weight").is_none());
    }
}
