//! Logging entry points
//!
//! `ExpressLogger` resolves names per call; `CounterHistogram` resolves once
//! at construction for callers that log the same histogram repeatedly.

use std::sync::Arc;

use tex_registry::{FixedRangeOptions, MetricKind, SharedRegistry, global};

use crate::bucket::bucket_index;
use crate::sink::MetricSink;
use crate::{LogError, Result};

/// Validating front end over a registry snapshot and a sink
///
/// Cheap to clone; safe to share across threads.
#[derive(Clone)]
pub struct ExpressLogger {
    registry: SharedRegistry,
    sink: Arc<dyn MetricSink>,
}

impl ExpressLogger {
    /// Create a logger over an explicit registry snapshot
    pub fn new(registry: SharedRegistry, sink: Arc<dyn MetricSink>) -> Self {
        Self { registry, sink }
    }

    /// Create a logger over the process-wide registry
    ///
    /// # Errors
    ///
    /// Returns `Uninitialized` when no registry has been installed.
    pub fn with_global_registry(sink: Arc<dyn MetricSink>) -> Result<Self> {
        Ok(Self::new(global()?, sink))
    }

    /// Registry snapshot this logger validates against
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Increment a counter metric by one
    ///
    /// # Errors
    ///
    /// Returns `UnknownMetric` when the name is not registered and
    /// `TypeMismatch` when it is registered as something other than a
    /// counter. On success exactly one increment reaches the sink.
    pub fn log_counter_increment(&self, name: &str) -> Result<()> {
        self.registry.resolve_kind(name, MetricKind::Counter)?;
        self.sink.counter_increment(name);
        Ok(())
    }

    /// Record one sample of a fixed-range histogram metric
    ///
    /// The value itself never fails: out-of-range samples clamp into the
    /// first or last bucket.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMetric` / `TypeMismatch` for registry mismatches.
    pub fn log_sample(&self, name: &str, value: i64) -> Result<()> {
        let definition = self.registry.resolve_kind(name, MetricKind::Histogram)?;
        // options are present by catalog validation for histogram kind
        let Some(options) = definition.histogram_options() else {
            return Err(LogError::TypeMismatch {
                name: name.to_string(),
                expected: MetricKind::Histogram.as_str(),
                actual: definition.kind().as_str(),
            });
        };
        self.sink.histogram_sample(name, bucket_index(value, options));
        Ok(())
    }

    /// Build a resolved histogram handle for repeated sampling
    ///
    /// # Errors
    ///
    /// Surfaces the same `UnknownMetric` / `TypeMismatch` conditions as
    /// `log_sample`, once, at construction.
    pub fn counter_histogram(&self, name: &str) -> Result<CounterHistogram> {
        let definition = self.registry.resolve_kind(name, MetricKind::Histogram)?;
        let Some(options) = definition.histogram_options() else {
            return Err(LogError::TypeMismatch {
                name: name.to_string(),
                expected: MetricKind::Histogram.as_str(),
                actual: definition.kind().as_str(),
            });
        };
        Ok(CounterHistogram {
            name: name.to_string(),
            options: *options,
            sink: Arc::clone(&self.sink),
        })
    }
}

impl std::fmt::Debug for ExpressLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressLogger")
            .field("metrics", &self.registry.len())
            .finish_non_exhaustive()
    }
}

/// Pre-resolved handle to one fixed-range histogram metric
///
/// Name and kind validation happen once when the handle is built, so
/// sampling itself cannot fail.
#[derive(Clone)]
pub struct CounterHistogram {
    name: String,
    options: FixedRangeOptions,
    sink: Arc<dyn MetricSink>,
}

impl CounterHistogram {
    /// Metric name this handle records against
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bucketing parameters of the underlying metric
    pub fn options(&self) -> &FixedRangeOptions {
        &self.options
    }

    /// Record one sample; out-of-range values clamp
    pub fn log_sample(&self, value: i64) {
        self.sink
            .histogram_sample(&self.name, bucket_index(value, &self.options));
    }
}

impl std::fmt::Debug for CounterHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterHistogram")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
