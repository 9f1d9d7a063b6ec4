use std::path::PathBuf;

use thiserror::Error;

use crate::types::DataType;

/// Convenience result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience result type for statistics, filters and vector operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Error type returned by the CSV loader.
///
/// Structural failures (`FileNotFound`, `EmptyData`, `SchemaMismatch`) always abort the whole load.
/// `ParseError` only surfaces for columns loaded under [`crate::ingestion::ParsePolicy::Strict`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not reference an existing, readable file.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The input has no data rows (header-only or zero bytes).
    #[error("no data rows in {input}")]
    EmptyData { input: String },

    /// A required column is missing from the header.
    #[error("schema mismatch in {input}: {message}")]
    SchemaMismatch { input: String, message: String },

    /// A value could not be converted into the declared [`DataType`].
    #[error("failed to parse value in {input} at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        input: String,
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Underlying I/O error while opening the file, other than not-found or permission denied.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (e.g. a row with the wrong number of fields).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Error type for operations over loaded records and plain numeric vectors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// No (present) values to operate on.
    #[error("empty input: {context}")]
    EmptyInput { context: String },

    /// The field is not part of the schema.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// The field exists but is not numeric.
    #[error("field '{field}' is {data_type:?}, expected a numeric field")]
    FieldTypeError { field: String, data_type: DataType },

    #[error("dimension mismatch: left has {left} components, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Angle is undefined when either vector has zero length.
    #[error("degenerate vector: angle is undefined for a zero-length vector")]
    DegenerateVector,
}

/// Error type for reading a [`crate::config::LoaderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
