//! Metric definition types
//!
//! These types describe what the catalog declares a metric to be. They are
//! built once during catalog load and never mutated afterwards.

use serde::Deserialize;

use crate::{RegistryError, Result};

/// Declared kind of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Monotonically increasing count of events
    Counter,
    /// Fixed-range bucketed distribution of sample values
    Histogram,
}

impl MetricKind {
    /// Get the string name of this kind
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Histogram => "histogram",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucketing parameters for a fixed-range histogram
///
/// All samples between `min_value` and `max_value` fall into one of
/// `bin_count` equally sized buckets; out-of-range samples clamp to the
/// first or last bucket. Validated at construction so the bucketer can
/// treat the parameters as trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFixedRangeOptions")]
pub struct FixedRangeOptions {
    bin_count: u32,
    min_value: i64,
    max_value: i64,
}

/// Serde-facing shape of histogram options before validation
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawFixedRangeOptions {
    bins: u32,
    min: i64,
    max: i64,
}

impl TryFrom<RawFixedRangeOptions> for FixedRangeOptions {
    type Error = RegistryError;

    fn try_from(raw: RawFixedRangeOptions) -> Result<Self> {
        FixedRangeOptions::new(raw.bins, raw.min, raw.max)
    }
}

impl FixedRangeOptions {
    /// Create validated histogram options
    ///
    /// # Errors
    ///
    /// Returns `InvalidHistogramOptions` when `bin_count` is zero, the range
    /// is empty, the range spans more than `i64::MAX` values, or the range
    /// holds fewer values than buckets (which would make the bucket width
    /// zero).
    pub fn new(bin_count: u32, min_value: i64, max_value: i64) -> Result<Self> {
        if bin_count == 0 {
            return Err(RegistryError::invalid_histogram_options(
                "bin count must be greater than zero",
            ));
        }
        if max_value <= min_value {
            return Err(RegistryError::invalid_histogram_options(format!(
                "max value {max_value} must be greater than min value {min_value}"
            )));
        }
        // widen to i128: the span of an arbitrary i64 range does not fit i64
        let span = i128::from(max_value) - i128::from(min_value) + 1;
        if span > i128::from(i64::MAX) {
            return Err(RegistryError::invalid_histogram_options(format!(
                "range from {min_value} to {max_value} is too wide"
            )));
        }
        if span < i128::from(bin_count) {
            return Err(RegistryError::invalid_histogram_options(format!(
                "range of {span} values cannot fill {bin_count} bins"
            )));
        }
        Ok(Self {
            bin_count,
            min_value,
            max_value,
        })
    }

    /// Number of buckets
    #[inline]
    pub const fn bin_count(&self) -> u32 {
        self.bin_count
    }

    /// Lowest in-range sample value
    #[inline]
    pub const fn min_value(&self) -> i64 {
        self.min_value
    }

    /// Highest in-range sample value
    #[inline]
    pub const fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Width of one bucket (floor division, at least 1 by construction)
    #[inline]
    pub const fn bin_size(&self) -> i64 {
        // cannot overflow: new() rejects spans wider than i64::MAX
        (self.max_value - self.min_value + 1) / self.bin_count as i64
    }
}

/// A metric as declared by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    name: String,
    kind: MetricKind,
    histogram: Option<FixedRangeOptions>,
}

impl MetricDefinition {
    /// Create a counter definition
    pub fn counter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MetricKind::Counter,
            histogram: None,
        }
    }

    /// Create a fixed-range histogram definition
    pub fn histogram(name: impl Into<String>, options: FixedRangeOptions) -> Self {
        Self {
            name: name.into(),
            kind: MetricKind::Histogram,
            histogram: Some(options),
        }
    }

    /// Fully qualified metric name (`domain.value_name`)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind
    #[inline]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Histogram options, present iff `kind` is `Histogram`
    #[inline]
    pub const fn histogram_options(&self) -> Option<&FixedRangeOptions> {
        self.histogram.as_ref()
    }
}
