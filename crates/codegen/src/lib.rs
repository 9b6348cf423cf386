//! Tex Codegen - Vendor atom binding emitter
//!
//! Renders a compiled `SchemaModel` into per-language constant bindings:
//! one integer constant per atom id, one per enum value. Targets:
//! - `RustWriter` - `pub const` declarations
//! - `CppHeaderWriter` - namespaced `constexpr` header
//! - `JavaWriter` - `public static final int` class members
//!
//! # Design Principles
//!
//! - **Deterministic**: rendering walks the model in declaration order and
//!   nothing else; the same model always yields byte-identical output
//! - **One naming scheme**: every writer goes through the same constant
//!   name mangler, so all targets agree on names and values
//! - **No partial output**: `write_sources` renders every requested target
//!   before touching the filesystem and removes already-written files when
//!   a later write fails

mod emit;
mod error;
mod names;

pub use emit::{
    BindingWriter, CppHeaderWriter, JavaWriter, Language, RustWriter, write_source, write_sources,
};
pub use error::CodegenError;
pub use names::{atom_constant, enum_value_constant, make_constant_name};

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;
