//! Codegen error types

use std::io;
use thiserror::Error;

/// Errors that can occur when emitting generated bindings
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Failed to write a generated source file
    #[error("failed to write generated file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}
