//! Metric catalog loading
//!
//! A catalog is the declarative source the registry is compiled from: one or
//! more TOML files, each listing metric declarations. Loading is strict -
//! any invalid declaration fails the whole catalog rather than being
//! silently skipped, so a registry can never be built from a partially
//! understood catalog.
//!
//! # Example Catalog File
//!
//! ```toml
//! [[metric]]
//! id = "tex_test.value_telemetry_express_test_counter"
//! type = "counter"
//!
//! [[metric]]
//! id = "tex_test.value_telemetry_express_fixed_range_histogram"
//! type = "histogram"
//! histogram = { bins = 10, min = 100, max = 100000 }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::definition::{FixedRangeOptions, MetricDefinition, MetricKind};
use crate::{RegistryError, Result};

/// File extension catalog files must carry
pub const CATALOG_EXTENSION: &str = "toml";

/// Raw serde shape of one metric declaration
#[derive(Debug, Deserialize)]
struct RawMetric {
    id: String,
    #[serde(rename = "type")]
    kind: MetricKind,
    histogram: Option<FixedRangeOptions>,
}

/// Raw serde shape of one catalog file
#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "metric")]
    metrics: Vec<RawMetric>,
}

/// A validated set of metric declarations
///
/// Declaration order is preserved; ids are unique.
#[derive(Debug, Default)]
pub struct Catalog {
    metrics: Vec<MetricDefinition>,
}

impl Catalog {
    /// Load a catalog from a single TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        contents.parse()
    }

    /// Load and merge every `.toml` catalog file in a directory
    ///
    /// Files are visited in lexicographic name order so the merged catalog
    /// is stable across platforms. Id uniqueness is enforced across the
    /// whole directory, not per file.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| RegistryError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == CATALOG_EXTENSION))
            .collect();
        paths.sort();

        let mut merged = Vec::new();
        for path in &paths {
            debug!(path = %path.display(), "loading catalog file");
            let catalog = Self::from_file(path)?;
            merged.extend(catalog.metrics);
        }
        Self::validate(merged)
    }

    /// Metric declarations in declaration order
    pub fn metrics(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    /// Number of declared metrics
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the catalog declares no metrics
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    fn validate(metrics: Vec<MetricDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for metric in &metrics {
            if !is_valid_metric_id(metric.name()) {
                return Err(RegistryError::InvalidMetricId {
                    id: metric.name().to_string(),
                });
            }
            if !seen.insert(metric.name().to_string()) {
                return Err(RegistryError::DuplicateMetricId {
                    id: metric.name().to_string(),
                });
            }
        }
        Ok(Self { metrics })
    }
}

impl FromStr for Catalog {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(s)?;

        let mut metrics = Vec::with_capacity(raw.metrics.len());
        for metric in raw.metrics {
            let definition = match (metric.kind, metric.histogram) {
                (MetricKind::Counter, None) => MetricDefinition::counter(metric.id),
                (MetricKind::Counter, Some(_)) => {
                    return Err(RegistryError::UnexpectedHistogramOptions { id: metric.id });
                }
                (MetricKind::Histogram, Some(options)) => {
                    MetricDefinition::histogram(metric.id, options)
                }
                (MetricKind::Histogram, None) => {
                    return Err(RegistryError::MissingHistogramOptions { id: metric.id });
                }
            };
            metrics.push(definition);
        }
        Self::validate(metrics)
    }
}

/// Check a metric id against the `domain.value_name` naming convention
///
/// A valid id is `<domain>.<value>` where the domain is lowercase
/// `[a-z][a-z0-9_]*` and the value part starts with the literal `value_`
/// prefix followed by `[a-z][a-z0-9_]*`.
pub fn is_valid_metric_id(id: &str) -> bool {
    let Some((domain, value)) = id.split_once('.') else {
        return false;
    };
    let Some(value_name) = value.strip_prefix("value_") else {
        return false;
    };
    is_lower_snake(domain) && is_lower_snake(value_name)
}

/// `[a-z][a-z0-9_]*`
fn is_lower_snake(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
