//! Tex Registry - Immutable metric registry for Telemetry Express
//!
//! This crate provides the compile-once, read-forever metric registry that
//! the runtime logging library resolves names against:
//! - `MetricDefinition` / `MetricKind` - a metric's declared identity
//! - `FixedRangeOptions` - validated histogram bucketing parameters
//! - `Registry` - exact-match, case-sensitive name lookup
//! - `Catalog` - TOML catalog loader that produces a `Registry`
//!
//! # Design Principles
//!
//! - **Load once**: a `Registry` is built from a catalog in a single pass
//!   and never mutated afterwards
//! - **Share freely**: `Arc<Registry>` is the handle callers keep; reads
//!   need no locking
//! - **Strict catalog**: a malformed metric declaration fails the whole
//!   load - no partially populated registry is ever observable
//!
//! # Example
//!
//! ```
//! use tex_registry::{Catalog, Registry};
//!
//! let catalog: Catalog = r#"
//!     [[metric]]
//!     id = "tex_test.value_telemetry_express_test_counter"
//!     type = "counter"
//! "#.parse().unwrap();
//! let registry = Registry::from_catalog(&catalog);
//! assert!(registry.resolve("tex_test.value_telemetry_express_test_counter").is_ok());
//! ```

mod catalog;
mod definition;
mod error;
mod registry;

pub use catalog::{Catalog, is_valid_metric_id};
pub use definition::{FixedRangeOptions, MetricDefinition, MetricKind};
pub use error::RegistryError;
pub use registry::{Registry, SharedRegistry, global, install};

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

// Test modules - only compiled during testing
#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod registry_test;
