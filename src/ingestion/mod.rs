//! Loading entrypoints and implementation.
//!
//! Most callers should use [`load`] (from [`mod@load`]) which:
//!
//! - validates the header against a [`crate::types::Schema`]
//! - converts every row into a typed [`crate::types::Record`], following the strict/tolerant
//!   [`ParsePolicy`] configured in [`LoadOptions`]
//! - optionally reports success/degraded values/failure/alerts to a [`LoadObserver`]
//!
//! Reader-level loading (e.g. from an in-memory buffer) is available under [`csv`].

pub mod csv;
pub mod load;
pub mod observability;

pub use csv::{DegradedValue, LoadedRecords};
pub use load::{load, load_all, LoadOptions, LoadRequest, ParsePolicy, DEFAULT_DATE_FORMAT};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};
