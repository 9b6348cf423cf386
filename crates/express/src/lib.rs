//! Tex Express - Runtime metric logging for Telemetry Express
//!
//! The hot-path library application code calls to record telemetry:
//! - `ExpressLogger` - validates a metric name against the registry and
//!   forwards one event per call to a `MetricSink`
//! - `CounterHistogram` - a histogram handle that resolves its name once
//!   and then logs samples infallibly
//! - `bucket_index` - the pure fixed-range bucketing function
//!
//! # Design Principles
//!
//! - **Never panic on data**: out-of-range samples clamp into the first or
//!   last bucket instead of failing; only registry mismatches are errors
//! - **Tagged results**: "unknown name" and "wrong kind" are distinct
//!   `LogError` variants so callers can branch without exception games
//! - **Non-blocking**: one sink call per logging call, no I/O, no locks on
//!   the logging path
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tex_express::{CountingSink, ExpressLogger};
//! use tex_registry::{Catalog, Registry};
//!
//! let catalog: Catalog = r#"
//!     [[metric]]
//!     id = "tex_test.value_telemetry_express_test_counter"
//!     type = "counter"
//! "#.parse().unwrap();
//! let registry = Arc::new(Registry::from_catalog(&catalog));
//! let sink = Arc::new(CountingSink::new());
//!
//! let logger = ExpressLogger::new(registry, sink.clone());
//! logger
//!     .log_counter_increment("tex_test.value_telemetry_express_test_counter")
//!     .unwrap();
//! assert_eq!(sink.counter_events(), 1);
//! ```

mod bucket;
mod error;
mod logger;
mod sink;

pub use bucket::bucket_index;
pub use error::LogError;
pub use logger::{CounterHistogram, ExpressLogger};
pub use sink::{Counter, CountingSink, MetricSink, NullSink};

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

#[cfg(test)]
mod logger_test;
