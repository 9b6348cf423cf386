//! Logging error types
//!
//! Registry mismatches are the only failures the logging path can produce.
//! Sample values themselves never fail - the bucketer clamps them.

use tex_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur when logging a metric event
#[derive(Debug, Error)]
pub enum LogError {
    /// Metric name is not present in the registry
    #[error("unknown metric '{name}'")]
    UnknownMetric {
        /// The name that failed to resolve
        name: String,
    },

    /// Metric exists but is registered as a different kind
    #[error("metric '{name}' is declared as {actual}, expected {expected}")]
    TypeMismatch {
        /// The name that resolved
        name: String,
        /// Kind this logging call requires
        expected: &'static str,
        /// Kind the registry declares
        actual: &'static str,
    },

    /// The process-wide registry was not installed before logging
    #[error("registry accessed before initialization")]
    Uninitialized,

    /// Any other registry failure surfaced through the logging API
    #[error(transparent)]
    Registry(RegistryError),
}

impl From<RegistryError> for LogError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownMetric { name } => Self::UnknownMetric { name },
            RegistryError::KindMismatch {
                name,
                expected,
                actual,
            } => Self::TypeMismatch {
                name,
                expected,
                actual,
            },
            RegistryError::Uninitialized => Self::Uninitialized,
            other => Self::Registry(other),
        }
    }
}

impl LogError {
    /// Whether the caller can recover by fixing the metric name
    ///
    /// `Uninitialized` indicates a process configuration bug and is not
    /// recoverable by ordinary callers.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownMetric { .. } | Self::TypeMismatch { .. })
    }
}
