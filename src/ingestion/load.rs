//! Loader entrypoint.
//!
//! Most callers should use [`load`], which reads a CSV file into an in-memory
//! [`crate::types::DataSet`] using a provided [`crate::types::Schema`].
//!
//! - Per-cell conversion failures follow [`LoadOptions::date_policy`] and
//!   [`LoadOptions::number_policy`].
//! - If an [`super::observability::LoadObserver`] is provided, success, degraded values,
//!   failures and alerts are reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};
use crate::types::{DataSet, Schema};

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Date format used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// What to do when a cell cannot be converted into its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// The first failing cell aborts the load with [`LoadError::ParseError`].
    Strict,
    /// The failing cell becomes [`crate::types::Value::Absent`]; the record is still included.
    Tolerant,
}

/// Options controlling loader behavior.
///
/// Use [`Default`] for common cases: `%Y-%m-%d` dates, tolerant date parsing, strict number
/// parsing, no observer.
#[derive(Clone)]
pub struct LoadOptions {
    /// `chrono` format string for date columns.
    pub date_format: String,
    /// Policy for date columns.
    pub date_policy: ParsePolicy,
    /// Policy for `Float64` and `Int64` columns.
    pub number_policy: ParsePolicy,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("date_format", &self.date_format)
            .field("date_policy", &self.date_policy)
            .field("number_policy", &self.number_policy)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_policy: ParsePolicy::Tolerant,
            number_policy: ParsePolicy::Strict,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a CSV file into a [`DataSet`].
///
/// When an observer is configured, this function reports:
///
/// - `on_degraded` once per value tolerated under [`ParsePolicy::Tolerant`]
/// - `on_success` on success, with row and degraded-value counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ## Tolerant dates (default)
///
/// ```no_run
/// use tabular_records::ingestion::{load, LoadOptions};
/// use tabular_records::schemas::product_schema;
///
/// # fn main() -> Result<(), tabular_records::LoadError> {
/// let products = load("products.csv", &product_schema(), &LoadOptions::default())?;
/// for product in products.iter() {
///     // Unparseable dates print as "N/A".
///     println!("{product}");
/// }
/// # Ok(())
/// # }
/// ```
///
/// ## Fail fast on any bad date, with stderr logging
///
/// ```no_run
/// use std::sync::Arc;
///
/// use tabular_records::ingestion::{load, LoadOptions, ParsePolicy, StdErrObserver};
/// use tabular_records::schemas::person_schema;
///
/// # fn main() -> Result<(), tabular_records::LoadError> {
/// let opts = LoadOptions {
///     date_policy: ParsePolicy::Strict,
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let people = load("people.csv", &person_schema(), &opts)?;
/// println!("rows={}", people.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load(path: impl AsRef<Path>, schema: &Schema, options: &LoadOptions) -> LoadResult<DataSet> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
        date_policy: options.date_policy,
        number_policy: options.number_policy,
    };

    let result = csv::ingest_csv_from_path(path, schema, options);

    match result {
        Ok(loaded) => {
            if let Some(obs) = options.observer.as_ref() {
                for degraded in &loaded.degraded {
                    obs.on_degraded(&ctx, degraded);
                }
                obs.on_success(
                    &ctx,
                    LoadStats {
                        rows: loaded.dataset.row_count(),
                        degraded: loaded.degraded.len(),
                    },
                );
            }
            Ok(loaded.dataset)
        }
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                let sev = severity_for_error(&e);
                obs.on_failure(&ctx, sev, &e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, &e);
                }
            }
            Err(e)
        }
    }
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::FileNotFound { .. } | LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::EmptyData { .. } | LoadError::SchemaMismatch { .. } | LoadError::ParseError { .. } => {
            LoadSeverity::Error
        }
    }
}

/// An owned load job: path, schema and options together.
///
/// Useful for running several independent loads in one pass (see [`load_all`]).
#[derive(Clone)]
pub struct LoadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Schema to validate/convert values into.
    pub schema: Schema,
    /// Options controlling the load.
    pub options: LoadOptions,
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("path", &self.path)
            .field("schema_fields", &self.schema.fields.len())
            .field("options", &self.options)
            .finish()
    }
}

impl LoadRequest {
    pub fn new(path: impl Into<PathBuf>, schema: Schema, options: LoadOptions) -> Self {
        Self {
            path: path.into(),
            schema,
            options,
        }
    }

    /// Execute the request by calling [`load`].
    pub fn run(&self) -> LoadResult<DataSet> {
        load(&self.path, &self.schema, &self.options)
    }
}

/// Run independent load requests in parallel on the rayon global pool.
///
/// Results are returned in request order. One request failing does not affect the others.
pub fn load_all(requests: &[LoadRequest]) -> Vec<LoadResult<DataSet>> {
    requests.par_iter().map(LoadRequest::run).collect()
}
