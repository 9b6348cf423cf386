//! Binding writers
//!
//! One writer per target language, all walking the model in declaration
//! order through the shared naming helpers. Rendering is pure string
//! building; only `write_source` and `write_sources` touch the filesystem.

mod cpp;
mod java;
mod rust;

use std::fs;
use std::path::Path;

use tex_schema::SchemaModel;
use tracing::info;

pub use cpp::CppHeaderWriter;
pub use java::JavaWriter;
pub use rust::RustWriter;

use crate::{CodegenError, Result};

/// Header line stamped at the top of every generated file
pub(crate) const GENERATED_BANNER: &str =
    "Generated by texgen from the vendor atom schema. Do not edit.";

/// Target language of a binding writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Rust `pub const` bindings
    Rust,
    /// C++ `constexpr` header bindings
    Cpp,
    /// Java `public static final int` bindings
    Java,
}

impl Language {
    /// Get the string name of this language
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Cpp => "cpp",
            Self::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders a compiled schema into generated source for one language
///
/// Implementations must be deterministic: the same model renders to
/// byte-identical output on every call.
pub trait BindingWriter {
    /// Language this writer emits
    fn language(&self) -> Language;

    /// Render the whole model into one generated source file
    fn render(&self, model: &SchemaModel) -> String;
}

/// Render a model and write the result to a file
///
/// # Errors
///
/// Returns `CodegenError::Io` when the file cannot be written; rendering
/// itself cannot fail.
pub fn write_source(
    writer: &dyn BindingWriter,
    model: &SchemaModel,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let source = writer.render(model);
    write_file(path, &source)?;
    info!(
        language = %writer.language(),
        path = %path.display(),
        atoms = model.len(),
        "wrote generated bindings"
    );
    Ok(())
}

/// Render every requested target, then write them all
///
/// Rendering finishes for every target before the first file is touched,
/// and a failed write removes the outputs written earlier in the run, so a
/// failing generation never leaves a partial set of bindings behind.
///
/// # Errors
///
/// Returns `CodegenError::Io` for the first output that cannot be written.
pub fn write_sources(
    outputs: &[(&dyn BindingWriter, &Path)],
    model: &SchemaModel,
) -> Result<()> {
    let rendered: Vec<String> = outputs
        .iter()
        .map(|(writer, _)| writer.render(model))
        .collect();

    let mut written: Vec<&Path> = Vec::new();
    for ((writer, path), source) in outputs.iter().zip(&rendered) {
        if let Err(err) = write_file(path, source) {
            for done in written {
                let _ = fs::remove_file(done);
            }
            return Err(err);
        }
        written.push(path);
        info!(
            language = %writer.language(),
            path = %path.display(),
            atoms = model.len(),
            "wrote generated bindings"
        );
    }
    Ok(())
}

fn write_file(path: &Path, source: &str) -> Result<()> {
    fs::write(path, source).map_err(|e| CodegenError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
