//! `tabular-records` loads delimited tabular files into immutable, in-memory record sets checked
//! against a user-provided [`types::Schema`], and offers small read-only operations over them.
//!
//! The primary entrypoint is [`ingestion::load`].
//!
//! ## What a load does
//!
//! - fails with [`LoadError::FileNotFound`] if the path is not an existing file
//! - fails with [`LoadError::SchemaMismatch`] if a required column is missing from the header
//!   (even when there are no data rows)
//! - fails with [`LoadError::EmptyData`] if no data rows follow the header
//! - converts each row into a [`types::Record`], preserving row order
//!
//! **Value types:** [`types::DataType::Utf8`] (verbatim text), [`types::DataType::Float64`],
//! [`types::DataType::Int64`] and [`types::DataType::Date`] (default format `%Y-%m-%d`).
//!
//! **Conversion failures** follow a per-call [`ingestion::ParsePolicy`]: `Strict` aborts the load
//! with [`LoadError::ParseError`], `Tolerant` stores [`types::Value::Absent`] for that cell and keeps
//! the row. Dates default to `Tolerant`, numbers to `Strict`. Absent values display as `N/A` and
//! are excluded from numeric aggregation.
//!
//! ## Quick example
//!
//! ```no_run
//! use tabular_records::ingestion::{load, LoadOptions};
//! use tabular_records::processing::descriptive_stats;
//! use tabular_records::schemas::{product_schema, PRICE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let products = load("product_file.csv", &product_schema(), &LoadOptions::default())?;
//! let stats = descriptive_stats(&products, PRICE)?;
//! println!("rows={} mean={} median={} std={:?}", stats.count, stats.mean, stats.median, stats.std);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: the CSV loader, load options/policies, observers for logging and alerts
//! - [`types`]: schema, values, records and the [`types::DataSet`] container
//! - [`schemas`]: preset person/employee/product/electronic-device schemas
//! - [`processing`]: filters and descriptive statistics
//! - [`vector`]: dot product, norm, angle and orthogonality
//! - [`view`]: column-oriented access for plotting (and `polars` export behind the `polars` feature)
//! - [`config`]: file path / date format settings from JSON
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod schemas;
pub mod types;
pub mod vector;
pub mod view;

pub use error::{ConfigError, LoadError, LoadResult, StatsError, StatsResult};
