//! Screening-interval policy configuration
//!
//! Recency windows are clinical policy, not code. The calculator reads
//! them from a [`ThresholdsConfig`] so interval changes ship as a config
//! document rather than a release.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a thresholds document.
///
/// The calculator itself never fails; errors exist only at the
/// configuration-load boundary.
#[derive(Debug, Error, Clone)]
pub enum ThresholdsError {
    /// Thresholds file could not be read
    #[error("IO error: {message}")]
    Io { message: String },

    /// Thresholds document is not valid JSON for the config schema
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl ThresholdsError {
    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Screening recency policy: how many years may pass before a screening
/// kind counts as due again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThresholdsConfig {
    /// Policy document version
    pub version: String,
    /// Interval in years per screening kind
    pub screening_intervals: IndexMap<String, u32>,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        let mut screening_intervals = IndexMap::new();
        for (kind, years) in [
            ("colonoscopy", 10),
            ("cervical_smear", 3),
            ("mammography", 2),
            ("hpv_test", 5),
            ("ldct", 1),
        ] {
            screening_intervals.insert(kind.to_string(), years);
        }
        Self {
            version: "2025.1".to_string(),
            screening_intervals,
        }
    }
}

impl ThresholdsConfig {
    /// Interval in years for a screening kind, if the policy covers it
    pub fn interval_years(&self, kind: &str) -> Option<u32> {
        self.screening_intervals.get(kind).copied()
    }

    /// Load a thresholds document from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ThresholdsError> {
        serde_json::from_str(json).map_err(|e| ThresholdsError::parse(e.to_string()))
    }

    /// Load a thresholds document from a JSON file at startup
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ThresholdsError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| ThresholdsError::io(e.to_string()))?;
        Self::from_json(&json)
    }
}
