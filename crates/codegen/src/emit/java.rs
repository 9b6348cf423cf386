//! Java binding writer

use std::fmt::Write;

use tex_schema::SchemaModel;

use super::{BindingWriter, GENERATED_BANNER, Language};
use crate::names::{atom_constant, enum_value_constant};

/// Emits a final class of `public static final int` members
#[derive(Debug, Clone)]
pub struct JavaWriter {
    package: String,
    class: String,
}

impl JavaWriter {
    /// Create a writer for a target package and class name
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl BindingWriter for JavaWriter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(&self, model: &SchemaModel) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// {GENERATED_BANNER}");
        let _ = writeln!(out);
        let _ = writeln!(out, "package {};", self.package);
        let _ = writeln!(out);
        let _ = writeln!(out, "public final class {} {{", self.class);

        for atom in model.atoms() {
            let _ = writeln!(
                out,
                "    public static final int {} = {};",
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
                        "    public static final int {} = {};",
                        enum_value_constant(atom, field.name(), value),
                        ordinal
                    );
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "    private {}() {{}}", self.class);
        let _ = writeln!(out, "}}");

        out
    }
}
