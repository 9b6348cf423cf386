//! Tests for the logging entry points

use std::sync::{Arc, Mutex};

use tex_registry::{Catalog, Registry, SharedRegistry};

use crate::error::LogError;
use crate::logger::ExpressLogger;
use crate::sink::MetricSink;

const COUNTER_ID: &str = "tex_test.value_telemetry_express_test_counter";
const HISTOGRAM_ID: &str = "tex_test.value_telemetry_express_fixed_range_histogram";
const UNREGISTERED_ID: &str = "tex_test.value_telemetry_express_test_counter2";

/// Sink that records every forwarded event for assertions
#[derive(Debug, Default)]
struct RecordingSink {
    counters: Mutex<Vec<String>>,
    samples: Mutex<Vec<(String, usize)>>,
}

impl RecordingSink {
    fn counters(&self) -> Vec<String> {
        self.counters.lock().unwrap().clone()
    }

    fn samples(&self) -> Vec<(String, usize)> {
        self.samples.lock().unwrap().clone()
    }
}

impl MetricSink for RecordingSink {
    fn counter_increment(&self, name: &str) {
        self.counters.lock().unwrap().push(name.to_string());
    }

    fn histogram_sample(&self, name: &str, bucket: usize) {
        self.samples.lock().unwrap().push((name.to_string(), bucket));
    }
}

fn test_registry() -> SharedRegistry {
    let catalog: Catalog = format!(
        r#"
        [[metric]]
        id = "{COUNTER_ID}"
        type = "counter"

        [[metric]]
        id = "{HISTOGRAM_ID}"
        type = "histogram"
        histogram = {{ bins = 10, min = 100, max = 100000 }}
        "#
    )
    .parse()
    .unwrap();
    Arc::new(Registry::from_catalog(&catalog))
}

fn test_logger() -> (ExpressLogger, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let logger = ExpressLogger::new(test_registry(), sink.clone());
    (logger, sink)
}

// =============================================================================
// Counter logging tests
// =============================================================================

#[test]
fn test_log_counter_valid_name() {
    let (logger, sink) = test_logger();
    logger.log_counter_increment(COUNTER_ID).unwrap();
    assert_eq!(sink.counters(), vec![COUNTER_ID.to_string()]);
}

#[test]
fn test_log_counter_unknown_name() {
    let (logger, sink) = test_logger();
    let err = logger.log_counter_increment(UNREGISTERED_ID).unwrap_err();
    assert!(matches!(err, LogError::UnknownMetric { .. }));
    assert!(err.is_recoverable());
    // failed calls never reach the sink
    assert!(sink.counters().is_empty());
}

#[test]
fn test_log_counter_wrong_kind() {
    let (logger, sink) = test_logger();
    let err = logger.log_counter_increment(HISTOGRAM_ID).unwrap_err();
    match err {
        LogError::TypeMismatch {
            name,
            expected,
            actual,
        } => {
            assert_eq!(name, HISTOGRAM_ID);
            assert_eq!(expected, "counter");
            assert_eq!(actual, "histogram");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
    assert!(sink.counters().is_empty());
}

#[test]
fn test_unknown_and_mismatch_are_distinct() {
    let (logger, _sink) = test_logger();
    let unknown = logger.log_counter_increment(UNREGISTERED_ID).unwrap_err();
    let mismatch = logger.log_counter_increment(HISTOGRAM_ID).unwrap_err();
    assert!(matches!(unknown, LogError::UnknownMetric { .. }));
    assert!(matches!(mismatch, LogError::TypeMismatch { .. }));
}

#[test]
fn test_each_call_forwards_one_increment() {
    let (logger, sink) = test_logger();
    for _ in 0..3 {
        logger.log_counter_increment(COUNTER_ID).unwrap();
    }
    assert_eq!(sink.counters().len(), 3);
}

// =============================================================================
// Histogram logging tests
// =============================================================================

#[test]
fn test_log_sample_in_range() {
    let (logger, sink) = test_logger();
    logger.log_sample(HISTOGRAM_ID, 100).unwrap();
    assert_eq!(sink.samples(), vec![(HISTOGRAM_ID.to_string(), 0)]);
}

#[test]
fn test_log_sample_out_of_range_clamps_instead_of_failing() {
    let (logger, sink) = test_logger();
    logger.log_sample(HISTOGRAM_ID, 99).unwrap();
    logger.log_sample(HISTOGRAM_ID, 100_001).unwrap();
    assert_eq!(
        sink.samples(),
        vec![
            (HISTOGRAM_ID.to_string(), 0),
            (HISTOGRAM_ID.to_string(), 9),
        ]
    );
}

#[test]
fn test_log_sample_unknown_name() {
    let (logger, _sink) = test_logger();
    let err = logger.log_sample("tex_test.value_missing", 5).unwrap_err();
    assert!(matches!(err, LogError::UnknownMetric { .. }));
}

#[test]
fn test_log_sample_wrong_kind() {
    let (logger, _sink) = test_logger();
    let err = logger.log_sample(COUNTER_ID, 5).unwrap_err();
    match err {
        LogError::TypeMismatch {
            name,
            expected,
            actual,
        } => {
            // actual must be the registered kind, not a guess
            assert_eq!(name, COUNTER_ID);
            assert_eq!(expected, "histogram");
            assert_eq!(actual, "counter");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

// =============================================================================
// CounterHistogram handle tests
// =============================================================================

#[test]
fn test_counter_histogram_resolves_once_then_logs() {
    let (logger, sink) = test_logger();
    let histogram = logger.counter_histogram(HISTOGRAM_ID).unwrap();
    assert_eq!(histogram.name(), HISTOGRAM_ID);

    // underflow, overflow, then one sample per bin - the reference sweep
    histogram.log_sample(99);
    histogram.log_sample(100_001);
    let bin_size = histogram.options().bin_size();
    for i in 0..10 {
        histogram.log_sample(100 + bin_size * i);
    }

    let samples = sink.samples();
    assert_eq!(samples.len(), 12);
    assert_eq!(samples[0].1, 0);
    assert_eq!(samples[1].1, 9);
    for (i, (name, bucket)) in samples[2..].iter().enumerate() {
        assert_eq!(name, HISTOGRAM_ID);
        assert_eq!(*bucket, i);
    }
}

#[test]
fn test_counter_histogram_unknown_name() {
    let (logger, _sink) = test_logger();
    let err = logger.counter_histogram("tex_test.value_missing").unwrap_err();
    assert!(matches!(err, LogError::UnknownMetric { .. }));
}

#[test]
fn test_counter_histogram_wrong_kind() {
    let (logger, _sink) = test_logger();
    let err = logger.counter_histogram(COUNTER_ID).unwrap_err();
    assert!(matches!(err, LogError::TypeMismatch { .. }));
}

// =============================================================================
// Concurrency tests
// =============================================================================

#[test]
fn test_concurrent_logging() {
    let (logger, sink) = test_logger();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for i in 0..250 {
                    logger.log_counter_increment(COUNTER_ID).unwrap();
                    logger.log_sample(HISTOGRAM_ID, 100 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(sink.counters().len(), 1000);
    assert_eq!(sink.samples().len(), 1000);
}
