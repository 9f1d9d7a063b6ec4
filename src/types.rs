//! Core data model types for loaded records.
//!
//! A load produces a [`DataSet`]: an ordered sequence of immutable [`Record`]s that all share one
//! [`Schema`] (a list of typed [`Field`]s).

use std::fmt;

use chrono::NaiveDate;

use crate::error::{StatsError, StatsResult};

/// Format used when rendering [`Value::Date`] values.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// UTF-8 text, taken verbatim from the source.
    Utf8,
    /// 64-bit floating point number.
    Float64,
    /// 64-bit signed integer.
    Int64,
    /// Calendar date.
    Date,
}

impl DataType {
    /// Whether values of this type can take part in numeric aggregation.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float64 | Self::Int64)
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
    /// Whether the column must be present in the source header.
    pub required: bool,
}

impl Field {
    /// Create a required field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
        }
    }

    /// Create a field whose column may be missing from the source.
    ///
    /// When the column is missing, every record carries [`Value::Absent`] for it.
    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            required: false,
            ..Self::new(name, data_type)
        }
    }
}

/// A list of fields describing the expected shape of incoming data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Iterate the names of columns the source header must contain.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns a field by name, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Compose this schema with an extension field-set.
    ///
    /// New fields are appended in order. A field whose name already exists replaces the existing
    /// definition at its original position.
    pub fn extend(mut self, extension: impl IntoIterator<Item = Field>) -> Self {
        for field in extension {
            match self.index_of(&field.name) {
                Some(idx) => self.fields[idx] = field,
                None => self.fields.push(field),
            }
        }
        self
    }

    /// Returns the index of a numeric field, or the reason it cannot be aggregated.
    pub(crate) fn numeric_index(&self, name: &str) -> StatsResult<usize> {
        let idx = self.index_of(name).ok_or_else(|| StatsError::UnknownField {
            field: name.to_owned(),
        })?;
        let data_type = self.fields[idx].data_type;
        if !data_type.is_numeric() {
            return Err(StatsError::FieldTypeError {
                field: name.to_owned(),
                data_type,
            });
        }
        Ok(idx)
    }
}

/// A single typed value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value: an empty cell, a missing optional column, or a value degraded under the
    /// tolerant policy. Never treated as zero or an empty string.
    Absent,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Numeric view of the value. `None` for absent and non-numeric values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// JSON representation used by [`DataSet::to_json_records`].
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Absent => serde_json::Value::Null,
            Self::Int64(v) => serde_json::Value::from(*v),
            // Non-finite floats have no JSON form.
            Self::Float64(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Utf8(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => serde_json::Value::String(d.format(DISPLAY_DATE_FORMAT).to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("N/A"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Utf8(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format(DISPLAY_DATE_FORMAT)),
        }
    }
}

/// One loaded row. Values are stored in schema field order and cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

/// In-memory, ordered collection of records sharing one [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    schema: Schema,
    records: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from schema and records.
    ///
    /// # Panics
    ///
    /// Panics if a record's length does not match the schema field count.
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        let expected_len = schema.fields.len();
        for (i, record) in records.iter().enumerate() {
            assert!(
                record.len() == expected_len,
                "record {i} has {} values but schema has {expected_len} fields",
                record.len()
            );
        }
        Self { schema, records }
    }

    /// Schema describing record shape.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of records in the dataset.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Schema-aware view of the record at `idx`.
    pub fn record(&self, idx: usize) -> Option<RecordView<'_>> {
        self.records.get(idx).map(|record| RecordView {
            schema: &self.schema,
            record,
        })
    }

    /// Iterate schema-aware record views in source order.
    pub fn iter(&self) -> impl Iterator<Item = RecordView<'_>> {
        self.records.iter().map(|record| RecordView {
            schema: &self.schema,
            record,
        })
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and record order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            records,
        }
    }

    /// Present values of a numeric field, in record order. Absent values are skipped.
    pub fn numeric_values(&self, field: &str) -> StatsResult<Vec<f64>> {
        let idx = self.schema.numeric_index(field)?;
        Ok(self
            .records
            .iter()
            .filter_map(|record| record.get(idx).and_then(Value::as_f64))
            .collect())
    }

    /// Convert every record into a JSON object keyed by column name.
    ///
    /// Absent values become `null`; dates are rendered as `YYYY-MM-DD` strings.
    pub fn to_json_records(&self) -> serde_json::Value {
        self.iter()
            .map(|view| serde_json::Value::Object(view.to_json_map()))
            .collect()
    }
}

/// A [`Record`] paired with the [`Schema`] it was loaded with.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl<'a> RecordView<'a> {
    /// Value of the named field, or `None` if the schema has no such field.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.schema
            .index_of(name)
            .and_then(|idx| self.record.get(idx))
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// Field/value pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + use<'a> {
        self.schema
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .zip(self.record.values().iter())
    }

    fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.entries()
            .map(|(name, value)| (name.to_owned(), value.to_json()))
            .collect()
    }
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
