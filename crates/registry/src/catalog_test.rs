//! Tests for catalog loading and validation

use std::fs;

use crate::catalog::{Catalog, is_valid_metric_id};
use crate::definition::MetricKind;
use crate::error::RegistryError;

const COUNTER_ID: &str = "tex_test.value_telemetry_express_test_counter";
const HISTOGRAM_ID: &str = "tex_test.value_telemetry_express_fixed_range_histogram";

fn sample_catalog() -> String {
    format!(
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
}

// =============================================================================
// Parsing tests
// =============================================================================

#[test]
fn test_parse_valid_catalog() {
    let catalog: Catalog = sample_catalog().parse().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.metrics()[0].name(), COUNTER_ID);
    assert_eq!(catalog.metrics()[0].kind(), MetricKind::Counter);
    assert_eq!(catalog.metrics()[1].kind(), MetricKind::Histogram);
}

#[test]
fn test_parse_empty_catalog() {
    let catalog: Catalog = "".parse::<Catalog>().unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_parse_invalid_toml() {
    let err = "[[metric".parse::<Catalog>().unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn test_parse_preserves_declaration_order() {
    let catalog: Catalog = r#"
        [[metric]]
        id = "d.value_b"
        type = "counter"

        [[metric]]
        id = "d.value_a"
        type = "counter"
    "#
    .parse()
    .unwrap();
    assert_eq!(catalog.metrics()[0].name(), "d.value_b");
    assert_eq!(catalog.metrics()[1].name(), "d.value_a");
}

// =============================================================================
// Validation tests
// =============================================================================

#[test]
fn test_histogram_without_options_rejected() {
    let err = r#"
        [[metric]]
        id = "d.value_latency"
        type = "histogram"
    "#
    .parse::<Catalog>()
    .unwrap_err();
    assert!(matches!(err, RegistryError::MissingHistogramOptions { .. }));
}

#[test]
fn test_counter_with_options_rejected() {
    let err = r#"
        [[metric]]
        id = "d.value_clicks"
        type = "counter"
        histogram = { bins = 10, min = 0, max = 100 }
    "#
    .parse::<Catalog>()
    .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::UnexpectedHistogramOptions { .. }
    ));
}

#[test]
fn test_invalid_histogram_options_fail_parse() {
    // zero bins is caught during deserialization via TryFrom
    let result = r#"
        [[metric]]
        id = "d.value_latency"
        type = "histogram"
        histogram = { bins = 0, min = 0, max = 100 }
    "#
    .parse::<Catalog>();
    assert!(result.is_err());
}

#[test]
fn test_invalid_metric_id_rejected() {
    let err = r#"
        [[metric]]
        id = "NoDotsHere"
        type = "counter"
    "#
    .parse::<Catalog>()
    .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidMetricId { .. }));
}

#[test]
fn test_duplicate_metric_id_rejected() {
    let err = r#"
        [[metric]]
        id = "d.value_clicks"
        type = "counter"

        [[metric]]
        id = "d.value_clicks"
        type = "counter"
    "#
    .parse::<Catalog>()
    .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateMetricId { .. }));
    assert!(err.to_string().contains("d.value_clicks"));
}

// =============================================================================
// Metric id convention tests
// =============================================================================

#[test]
fn test_valid_metric_ids() {
    assert!(is_valid_metric_id("tex_test.value_telemetry_express_test_counter"));
    assert!(is_valid_metric_id("a.value_b"));
    assert!(is_valid_metric_id("domain_2.value_count_10"));
}

#[test]
fn test_invalid_metric_ids() {
    assert!(!is_valid_metric_id(""));
    assert!(!is_valid_metric_id("no_dot"));
    assert!(!is_valid_metric_id("domain.no_value_prefix"));
    assert!(!is_valid_metric_id("domain.value_"));
    assert!(!is_valid_metric_id("domain.value_2leading_digit"));
    assert!(!is_valid_metric_id("Domain.value_count"));
    assert!(!is_valid_metric_id("domain.value_Count"));
    assert!(!is_valid_metric_id("2domain.value_count"));
}

// =============================================================================
// Directory loading tests
// =============================================================================

#[test]
fn test_from_dir_merges_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("b_extra.toml"),
        "[[metric]]\nid = \"d.value_second\"\ntype = \"counter\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_base.toml"),
        "[[metric]]\nid = \"d.value_first\"\ntype = \"counter\"\n",
    )
    .unwrap();
    // non-catalog files are ignored
    fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

    let catalog = Catalog::from_dir(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.metrics()[0].name(), "d.value_first");
    assert_eq!(catalog.metrics()[1].name(), "d.value_second");
}

#[test]
fn test_from_dir_duplicate_across_files_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let body = "[[metric]]\nid = \"d.value_clicks\"\ntype = \"counter\"\n";
    fs::write(dir.path().join("a.toml"), body).unwrap();
    fs::write(dir.path().join("b.toml"), body).unwrap();

    let err = Catalog::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateMetricId { .. }));
}

#[test]
fn test_from_dir_missing_directory() {
    let err = Catalog::from_dir("/nonexistent/catalog/dir").unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn test_from_file_missing_file() {
    let err = Catalog::from_file("/nonexistent/catalog.toml").unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}
