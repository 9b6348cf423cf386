//! Registry error types
//!
//! Errors that can occur when loading a metric catalog or resolving a
//! metric name against the registry.

use std::io;
use thiserror::Error;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Metric name is not present in the registry
    #[error("unknown metric '{name}'")]
    UnknownMetric {
        /// The name that failed to resolve
        name: String,
    },

    /// A metric resolved to a different kind than the caller required
    #[error("metric '{name}' is declared as {actual}, expected {expected}")]
    KindMismatch {
        /// The name that resolved
        name: String,
        /// Kind the caller required
        expected: &'static str,
        /// Kind the catalog declares
        actual: &'static str,
    },

    /// The process-wide registry was used before `install` was called
    #[error("registry accessed before initialization")]
    Uninitialized,

    /// Failed to read a catalog file
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse catalog TOML
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Metric id does not follow the `domain.value_name` convention
    #[error("metric id '{id}' does not follow the 'domain.value_name' naming convention")]
    InvalidMetricId {
        /// The offending id
        id: String,
    },

    /// The same metric id was declared twice in one catalog
    #[error("metric id '{id}' is declared more than once")]
    DuplicateMetricId {
        /// The redefined id
        id: String,
    },

    /// Histogram metric is missing its bucketing options
    #[error("histogram metric '{id}' is missing fixed-range options")]
    MissingHistogramOptions {
        /// The incomplete metric id
        id: String,
    },

    /// Counter metric carries histogram options it cannot use
    #[error("counter metric '{id}' must not declare histogram options")]
    UnexpectedHistogramOptions {
        /// The offending metric id
        id: String,
    },

    /// Histogram options failed validation
    #[error("invalid histogram options: {reason}")]
    InvalidHistogramOptions {
        /// Human-readable validation failure
        reason: String,
    },
}

impl RegistryError {
    /// Create an UnknownMetric error
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Self::UnknownMetric { name: name.into() }
    }

    /// Create a KindMismatch error
    pub fn kind_mismatch(
        name: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::KindMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidHistogramOptions error
    pub fn invalid_histogram_options(reason: impl Into<String>) -> Self {
        Self::InvalidHistogramOptions {
            reason: reason.into(),
        }
    }
}
