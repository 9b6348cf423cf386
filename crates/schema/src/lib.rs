//! Tex Schema - Atom schema compiler for Telemetry Express
//!
//! Parses the declarative vendor atom schema into an immutable in-memory
//! model the binding emitter renders from:
//! - `SchemaModel` - ordered collection of compiled atoms
//! - `AtomDefinition` / `FieldDefinition` / `EnumDefinition` - the model
//! - `compile` - one-shot parse-and-validate entry point
//!
//! # Design Principles
//!
//! - **Two stages**: parse raw TOML, then validate into the model; no
//!   consumer ever sees a partially valid schema
//! - **Implicit ordinals**: enum values are numbered by declaration order
//!   starting at 0 - the schema never states ordinals, so regenerated
//!   constants cannot drift for an unchanged schema
//! - **Vendor range**: atom ids live in the reserved vendor window and must
//!   be unique across the whole compilation
//!
//! # Example Schema
//!
//! ```toml
//! [[atom]]
//! name = "vendor_atom1"
//! id = 105501
//!
//! [[atom.field]]
//! name = "type"
//! type = "enum"
//! values = ["UNKNOWN", "TYPE_1", "TYPE_2", "TYPE_3"]
//! ```

mod error;
mod model;
mod parse;

pub use error::SchemaError;
pub use model::{AtomDefinition, EnumDefinition, FieldDefinition, FieldType, SchemaModel};
pub use parse::compile;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Lowest atom id in the vendor reservation
pub const VENDOR_ATOM_ID_MIN: u32 = 100_000;

/// Highest atom id in the vendor reservation
pub const VENDOR_ATOM_ID_MAX: u32 = 199_999;
