//! Tests for registry resolution

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::definition::MetricKind;
use crate::error::RegistryError;
use crate::registry::{Registry, global, install};

const COUNTER_ID: &str = "tex_test.value_telemetry_express_test_counter";
const HISTOGRAM_ID: &str = "tex_test.value_telemetry_express_fixed_range_histogram";

fn sample_registry() -> Registry {
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
    Registry::from_catalog(&catalog)
}

// =============================================================================
// Resolution tests
// =============================================================================

#[test]
fn test_resolve_known_name() {
    let registry = sample_registry();
    let def = registry.resolve(COUNTER_ID).unwrap();
    assert_eq!(def.name(), COUNTER_ID);
    assert_eq!(def.kind(), MetricKind::Counter);
}

#[test]
fn test_resolve_unknown_name() {
    let registry = sample_registry();
    let err = registry.resolve("tex_test.value_missing").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownMetric { .. }));
    assert!(err.to_string().contains("tex_test.value_missing"));
}

#[test]
fn test_resolve_is_case_sensitive() {
    let registry = sample_registry();
    assert!(registry.resolve(&COUNTER_ID.to_uppercase()).is_err());
}

#[test]
fn test_resolve_kind_match() {
    let registry = sample_registry();
    assert!(registry.resolve_kind(COUNTER_ID, MetricKind::Counter).is_ok());
    assert!(
        registry
            .resolve_kind(HISTOGRAM_ID, MetricKind::Histogram)
            .is_ok()
    );
}

#[test]
fn test_resolve_kind_mismatch() {
    let registry = sample_registry();
    let err = registry
        .resolve_kind(HISTOGRAM_ID, MetricKind::Counter)
        .unwrap_err();
    match err {
        RegistryError::KindMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, "counter");
            assert_eq!(actual, "histogram");
        }
        other => panic!("expected KindMismatch, got {other:?}"),
    }
}

#[test]
fn test_contains_and_len() {
    let registry = sample_registry();
    assert!(registry.contains(COUNTER_ID));
    assert!(!registry.contains("d.value_missing"));
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn test_empty_registry() {
    let registry = Registry::default();
    assert!(registry.is_empty());
    assert!(registry.resolve("d.value_anything").is_err());
}

// =============================================================================
// Concurrent read tests
// =============================================================================

#[test]
fn test_concurrent_resolution() {
    let registry = Arc::new(sample_registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    assert!(registry.resolve(COUNTER_ID).is_ok());
                    assert!(registry.resolve("d.value_missing").is_err());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// =============================================================================
// Process-wide install tests
// =============================================================================

// Single test because OnceLock state is shared across the test binary.
#[test]
fn test_install_once_then_global() {
    let first = Arc::new(sample_registry());
    let installed = install(Arc::clone(&first));
    assert_eq!(installed.len(), first.len());

    // second install does not replace the snapshot
    let replacement = Arc::new(Registry::default());
    let kept = install(replacement);
    assert_eq!(kept.len(), first.len());

    let fetched = global().unwrap();
    assert!(fetched.contains(COUNTER_ID));
}

#[test]
fn test_uninitialized_error_display() {
    let err = RegistryError::Uninitialized;
    assert!(err.to_string().contains("before initialization"));
}
