//! Rust binding writer

use std::fmt::Write;

use tex_schema::SchemaModel;

use super::{BindingWriter, GENERATED_BANNER, Language};
use crate::names::{atom_constant, enum_value_constant};

/// Emits `pub const` atom id and enum value bindings
#[derive(Debug, Default, Clone, Copy)]
pub struct RustWriter;

impl RustWriter {
    /// Create a Rust writer
    pub fn new() -> Self {
        Self
    }
}

impl BindingWriter for RustWriter {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn render(&self, model: &SchemaModel) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// {GENERATED_BANNER}");
        let _ = writeln!(out);

        for atom in model.atoms() {
            let _ = writeln!(
                out,
                "pub const {}: u32 = {};",
                atom_constant(atom),
                atom.id()
            );
        }

        for atom in model.atoms() {
            for field in atom.fields() {
                let Some(definition) = field.enum_definition() else {
                    continue;
                };
                let _ = writeln!(out);
                for (ordinal, value) in definition.iter() {
                    let _ = writeln!(
                        out,
                        "pub const {}: i32 = {};",
                        enum_value_constant(atom, field.name(), value),
                        ordinal
                    );
                }
            }
        }

        out
    }
}
