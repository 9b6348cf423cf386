//! Metric sinks
//!
//! A sink receives exactly one event per successful logging call. Sinks are
//! infallible from the logger's point of view - aggregation, batching, and
//! delivery are the sink's concern, never the caller's.

use std::sync::atomic::{AtomicU64, Ordering};

/// Destination for validated metric events
///
/// Implementations must be cheap and non-blocking; the logger calls them on
/// the hot path.
pub trait MetricSink: Send + Sync {
    /// Record one increment of a counter metric
    fn counter_increment(&self, name: &str);

    /// Record one histogram sample, already reduced to its bucket index
    fn histogram_sample(&self, name: &str, bucket: usize);
}

/// Shared event tally with interior mutability
///
/// Backs `CountingSink` and any sink that only needs running totals. All
/// operations use relaxed ordering; a tally imposes no ordering on the
/// events it counts.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Start a tally at zero
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Add `val` events to the tally
    #[inline]
    pub fn add(&self, val: u64) {
        self.0.fetch_add(val, Ordering::Relaxed);
    }

    /// Add one event to the tally
    #[inline]
    pub fn inc(&self) {
        self.add(1);
    }

    /// Read the tally without resetting it
    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Drain the tally: reset to zero and return what it held
    #[inline]
    pub fn take(&self) -> u64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MetricSink for NullSink {
    fn counter_increment(&self, _name: &str) {}

    fn histogram_sample(&self, _name: &str, _bucket: usize) {}
}

/// Sink that keeps lock-free totals of forwarded events
///
/// Useful as a smoke-test sink and for wiring coarse self-observability
/// without a transport.
#[derive(Debug, Default)]
pub struct CountingSink {
    counters: Counter,
    samples: Counter,
}

impl CountingSink {
    /// Create a sink with zeroed totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Total counter increments forwarded so far
    pub fn counter_events(&self) -> u64 {
        self.counters.get()
    }

    /// Total histogram samples forwarded so far
    pub fn histogram_events(&self) -> u64 {
        self.samples.get()
    }
}

impl MetricSink for CountingSink {
    fn counter_increment(&self, _name: &str) {
        self.counters.inc();
    }

    fn histogram_sample(&self, _name: &str, _bucket: usize) {
        self.samples.inc();
    }
}
