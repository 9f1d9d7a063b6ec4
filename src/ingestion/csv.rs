//! CSV loading implementation.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LoadError, LoadResult};
use crate::types::{DataSet, DataType, Record, Schema, Value};

use super::load::{LoadOptions, ParsePolicy};

/// A value that failed conversion under [`ParsePolicy::Tolerant`] and was stored as
/// [`Value::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedValue {
    /// 1-based line number in the source (the header is line 1).
    pub row: usize,
    pub column: String,
    pub raw: String,
    pub message: String,
}

/// Result of a successful load: the records plus every tolerated conversion failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords {
    pub dataset: DataSet,
    pub degraded: Vec<DegradedValue>,
}

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The path must reference an existing, readable file ([`LoadError::FileNotFound`] otherwise).
/// - CSV must have headers, and the headers must contain every required schema field (order can
///   differ). Optional fields missing from the header load as [`Value::Absent`].
/// - At least one data row must follow the header ([`LoadError::EmptyData`] otherwise).
/// - Each value is converted according to its schema field type and the options' policies.
///
/// The file is opened and closed within this call.
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &LoadOptions,
) -> LoadResult<LoadedRecords> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);
    ingest_csv_from_reader(&mut rdr, &path.display().to_string(), schema, options)
}

/// A file that vanished or cannot be read is reported like a missing one.
fn open_error(path: &Path, err: io::Error) -> LoadError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(err),
    }
}

/// Load CSV data from an existing CSV reader.
///
/// `input` names the source in error messages (usually the file path).
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    input: &str,
    schema: &Schema,
    options: &LoadOptions,
) -> LoadResult<LoadedRecords> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::EmptyData {
            input: input.to_owned(),
        });
    }

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs: Vec<Option<usize>> = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let idx = headers.iter().position(|h| h == field.name);
        if idx.is_none() && field.required {
            return Err(LoadError::SchemaMismatch {
                input: input.to_owned(),
                message: format!(
                    "missing required column '{field}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>(),
                    field = field.name
                ),
            });
        }
        col_idxs.push(idx);
    }

    let converter = Converter::new(options);
    let mut records = Vec::new();
    let mut degraded = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let csv_record = result?;

        let mut values = Vec::with_capacity(schema.fields.len());
        for (field, csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let Some(csv_idx) = *csv_idx else {
                values.push(Value::Absent);
                continue;
            };
            let raw = csv_record.get(csv_idx).unwrap_or("");
            match converter.convert(field.data_type, raw) {
                Ok(value) => values.push(value),
                Err(message) => match converter.policy_for(field.data_type) {
                    ParsePolicy::Strict => {
                        return Err(LoadError::ParseError {
                            input: input.to_owned(),
                            row: user_row,
                            column: field.name.clone(),
                            raw: raw.to_owned(),
                            message,
                        });
                    }
                    ParsePolicy::Tolerant => {
                        degraded.push(DegradedValue {
                            row: user_row,
                            column: field.name.clone(),
                            raw: raw.to_owned(),
                            message,
                        });
                        values.push(Value::Absent);
                    }
                },
            }
        }
        records.push(Record::new(values));
    }

    if records.is_empty() {
        return Err(LoadError::EmptyData {
            input: input.to_owned(),
        });
    }

    Ok(LoadedRecords {
        dataset: DataSet::new(schema.clone(), records),
        degraded,
    })
}

/// Per-load cell conversion settings.
struct Converter<'a> {
    date_format: &'a str,
    date_policy: ParsePolicy,
    number_policy: ParsePolicy,
}

impl<'a> Converter<'a> {
    fn new(options: &'a LoadOptions) -> Self {
        Self {
            date_format: options.date_format.as_str(),
            date_policy: options.date_policy,
            number_policy: options.number_policy,
        }
    }

    fn policy_for(&self, data_type: DataType) -> ParsePolicy {
        match data_type {
            DataType::Date => self.date_policy,
            DataType::Float64 | DataType::Int64 => self.number_policy,
            // Text conversion cannot fail.
            DataType::Utf8 => ParsePolicy::Strict,
        }
    }

    /// Convert one cell. Text is kept verbatim. Numbers and dates are trimmed first; an empty
    /// number is absent, while an empty date is a conversion failure.
    fn convert(&self, data_type: DataType, raw: &str) -> Result<Value, String> {
        let trimmed = raw.trim();
        match data_type {
            DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
            DataType::Float64 | DataType::Int64 if trimmed.is_empty() => Ok(Value::Absent),
            DataType::Float64 => match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Value::Float64(v)),
                Ok(_) => Err("non-finite number".to_string()),
                Err(e) => Err(e.to_string()),
            },
            DataType::Int64 => trimmed
                .parse::<i64>()
                .map(Value::Int64)
                .map_err(|e| e.to_string()),
            DataType::Date if trimmed.is_empty() => Err(format!(
                "empty date (expected format '{}')",
                self.date_format
            )),
            DataType::Date => NaiveDate::parse_from_str(trimmed, self.date_format)
                .map(Value::Date)
                .map_err(|e| format!("{e} (expected format '{}')", self.date_format)),
        }
    }
}
