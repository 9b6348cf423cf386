//! Metric name resolution
//!
//! The registry is an immutable snapshot built from a validated catalog.
//! Lookups are exact and case-sensitive. A process-wide handle can be
//! installed exactly once for callers that cannot thread an `Arc` through;
//! library code should prefer passing the snapshot explicitly.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::catalog::Catalog;
use crate::definition::{MetricDefinition, MetricKind};
use crate::{RegistryError, Result};

/// Shared handle to an immutable registry snapshot
pub type SharedRegistry = Arc<Registry>;

/// Immutable metric name → definition mapping
#[derive(Debug, Default)]
pub struct Registry {
    metrics: HashMap<String, MetricDefinition>,
}

impl Registry {
    /// Build a registry from a validated catalog
    ///
    /// The catalog guarantees id validity and uniqueness, so this cannot
    /// fail.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut metrics = HashMap::with_capacity(catalog.len());
        for definition in catalog.metrics() {
            metrics.insert(definition.name().to_string(), definition.clone());
        }
        info!(metrics = metrics.len(), "registry built from catalog");
        Self { metrics }
    }

    /// Resolve a metric name to its definition
    ///
    /// # Errors
    ///
    /// Returns `UnknownMetric` when the name is not declared.
    pub fn resolve(&self, name: &str) -> Result<&MetricDefinition> {
        self.metrics
            .get(name)
            .ok_or_else(|| RegistryError::unknown_metric(name))
    }

    /// Resolve a name and require a specific kind
    ///
    /// # Errors
    ///
    /// Returns `UnknownMetric` for unregistered names and `KindMismatch`
    /// when the name resolves to a different kind.
    pub fn resolve_kind(&self, name: &str, kind: MetricKind) -> Result<&MetricDefinition> {
        let definition = self.resolve(name)?;
        if definition.kind() != kind {
            return Err(RegistryError::kind_mismatch(
                name,
                kind.as_str(),
                definition.kind().as_str(),
            ));
        }
        Ok(definition)
    }

    /// Whether a name is declared, regardless of kind
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Number of registered metrics
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

static GLOBAL: OnceLock<SharedRegistry> = OnceLock::new();

/// Install the process-wide registry snapshot
///
/// Returns the snapshot that is actually installed: the given one, or the
/// previously installed one if initialization already happened. Later
/// installs never replace an existing snapshot - the registry is load-once
/// by contract.
pub fn install(registry: SharedRegistry) -> SharedRegistry {
    GLOBAL.get_or_init(|| registry).clone()
}

/// Get the process-wide registry snapshot
///
/// # Errors
///
/// Returns `Uninitialized` when `install` has not been called. This is a
/// configuration bug in the embedding process, not a recoverable runtime
/// condition.
pub fn global() -> Result<SharedRegistry> {
    GLOBAL.get().cloned().ok_or(RegistryError::Uninitialized)
}
