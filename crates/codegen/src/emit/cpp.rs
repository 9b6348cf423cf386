//! C++ header binding writer

use std::fmt::Write;

use tex_schema::SchemaModel;

use super::{BindingWriter, GENERATED_BANNER, Language};
use crate::names::{atom_constant, enum_value_constant};

/// Default namespace spec when the caller gives none
pub const DEFAULT_NAMESPACES: &str = "android,vendoratoms";

/// Emits a namespaced `constexpr` header
#[derive(Debug, Clone)]
pub struct CppHeaderWriter {
    namespaces: Vec<String>,
}

impl CppHeaderWriter {
    /// Create a writer for a comma-separated namespace spec
    ///
    /// `"android,vendoratoms"` nests `android::vendoratoms`.
    pub fn new(namespaces: &str) -> Self {
        Self {
            namespaces: namespaces
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for CppHeaderWriter {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACES)
    }
}

impl BindingWriter for CppHeaderWriter {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn render(&self, model: &SchemaModel) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// {GENERATED_BANNER}");
        let _ = writeln!(out);
        let _ = writeln!(out, "#pragma once");
        let _ = writeln!(out);
        let _ = writeln!(out, "#include <cstdint>");
        let _ = writeln!(out);

        for namespace in &self.namespaces {
            let _ = writeln!(out, "namespace {namespace} {{");
        }
        let _ = writeln!(out);

        for atom in model.atoms() {
            let _ = writeln!(
                out,
                "constexpr int32_t {} = {};",
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
                        "constexpr int32_t {} = {};",
                        enum_value_constant(atom, field.name(), value),
                        ordinal
                    );
                }
            }
        }

        let _ = writeln!(out);
        for namespace in self.namespaces.iter().rev() {
            let _ = writeln!(out, "}}  // namespace {namespace}");
        }

        out
    }
}
