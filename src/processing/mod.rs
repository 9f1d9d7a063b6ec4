//! In-memory operations over loaded records.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by the loader.
//! Every operation is a pure function of its inputs and returns a new dataset or summary.
//!
//! Currently implemented:
//!
//! - [`filter()`]: record filtering by predicate
//! - [`filter_by_range()`], [`filter_by_date_range()`], [`filter_born_after()`]: field filters
//! - [`descriptive_stats()`]: mean/median/sample std over a numeric field
//!
//! ## Example: filter → describe
//!
//! ```rust
//! use tabular_records::processing::{descriptive_stats, filter_by_range, StdDev};
//! use tabular_records::types::{DataSet, DataType, Field, Record, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("Name", DataType::Utf8),
//!     Field::new("Price", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         Record::new(vec![Value::Utf8("Lamp".into()), Value::Float64(10.0)]),
//!         Record::new(vec![Value::Utf8("Desk".into()), Value::Float64(200.0)]),
//!         Record::new(vec![Value::Utf8("Chair".into()), Value::Float64(30.0)]),
//!         Record::new(vec![Value::Utf8("Stool".into()), Value::Absent]),
//!     ],
//! );
//!
//! // Keep affordable items (absent prices never match).
//! let cheap = filter_by_range(&ds, "Price", 0.0, 50.0).unwrap();
//! assert_eq!(cheap.row_count(), 2);
//!
//! let stats = descriptive_stats(&cheap, "Price").unwrap();
//! assert_eq!(stats.mean, 20.0);
//! assert!(matches!(stats.std, StdDev::Sample(_)));
//! ```

pub mod filter;
pub mod stats;

pub use filter::{filter, filter_born_after, filter_by_date_range, filter_by_range};
pub use stats::{describe, descriptive_stats, DescriptiveStats, StdDev};
