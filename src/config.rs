//! Loader settings supplied by a configuration provider.
//!
//! The loader never reads global state; settings are deserialized into a [`LoaderConfig`] and
//! turned into call parameters.
//!
//! ```rust
//! use tabular_records::config::LoaderConfig;
//! use tabular_records::ingestion::ParsePolicy;
//!
//! let cfg = LoaderConfig::from_json_str(r#"{"file_path": "data/persons.csv"}"#).unwrap();
//! assert_eq!(cfg.date_format, "%Y-%m-%d");
//! assert_eq!(cfg.date_policy, ParsePolicy::Tolerant);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ingestion::{LoadOptions, LoadRequest, ParsePolicy, DEFAULT_DATE_FORMAT};
use crate::types::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// CSV file to load.
    pub file_path: PathBuf,
    /// `chrono` format string for date columns.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_policy")]
    pub date_policy: ParsePolicy,
    #[serde(default = "default_number_policy")]
    pub number_policy: ParsePolicy,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_date_policy() -> ParsePolicy {
    ParsePolicy::Tolerant
}

fn default_number_policy() -> ParsePolicy {
    ParsePolicy::Strict
}

impl LoaderConfig {
    /// Settings for `file_path` with every other setting at its default.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            date_format: default_date_format(),
            date_policy: default_date_policy(),
            number_policy: default_number_policy(),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Loader options carrying these settings (no observer attached).
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            date_format: self.date_format.clone(),
            date_policy: self.date_policy,
            number_policy: self.number_policy,
            ..Default::default()
        }
    }

    /// A load job for `schema` against the configured file.
    pub fn request(&self, schema: Schema) -> LoadRequest {
        LoadRequest::new(self.file_path.clone(), schema, self.load_options())
    }
}
