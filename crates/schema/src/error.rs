//! Schema compiler error types
//!
//! All of these are compile-time failures: any one of them aborts the
//! generation run with no partial model or output.

use std::io;
use thiserror::Error;

/// Errors that can occur while compiling an atom schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read a schema file
    #[error("failed to read schema file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse schema TOML
    #[error("failed to parse schema: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two atoms declare the same numeric id
    #[error("atom id {id} is declared by both '{first}' and '{second}'")]
    DuplicateAtomId {
        /// The reused id
        id: u32,
        /// Atom that declared the id first
        first: String,
        /// Atom that redeclared it
        second: String,
    },

    /// Two atoms declare the same name
    #[error("atom '{name}' is declared more than once")]
    DuplicateAtomName {
        /// The reused name
        name: String,
    },

    /// Atom id is outside the reserved vendor window
    #[error("atom '{atom}' id {id} is outside the vendor range {min}..={max}")]
    IdOutOfVendorRange {
        /// Atom declaring the id
        atom: String,
        /// The out-of-range id
        id: u32,
        /// Inclusive lower bound of the vendor range
        min: u32,
        /// Inclusive upper bound of the vendor range
        max: u32,
    },

    /// Atom name does not follow the lower_snake convention
    #[error("atom name '{name}' must be lower_snake_case")]
    InvalidAtomName {
        /// The offending name
        name: String,
    },

    /// Field name does not follow the lower_snake convention
    #[error("field '{field}' of atom '{atom}' must be lower_snake_case")]
    InvalidFieldName {
        /// Owning atom
        atom: String,
        /// The offending field name
        field: String,
    },

    /// One atom declares the same field name twice
    #[error("field '{field}' of atom '{atom}' is declared more than once")]
    DuplicateFieldName {
        /// Owning atom
        atom: String,
        /// The reused field name
        field: String,
    },

    /// Enum field declares no values
    #[error("enum field '{field}' of atom '{atom}' declares no values")]
    EmptyEnum {
        /// Owning atom
        atom: String,
        /// The empty field
        field: String,
    },

    /// Non-enum field declares enum values
    #[error("field '{field}' of atom '{atom}' is not an enum but declares values")]
    UnexpectedEnumValues {
        /// Owning atom
        atom: String,
        /// The offending field
        field: String,
    },

    /// Enum value name does not follow the UPPER_SNAKE convention
    #[error("enum value '{value}' of field '{field}' in atom '{atom}' must be UPPER_SNAKE_CASE")]
    InvalidEnumValue {
        /// Owning atom
        atom: String,
        /// Owning field
        field: String,
        /// The offending value name
        value: String,
    },

    /// One enum field declares the same value name twice
    #[error("enum value '{value}' of field '{field}' in atom '{atom}' is declared more than once")]
    DuplicateEnumValue {
        /// Owning atom
        atom: String,
        /// Owning field
        field: String,
        /// The reused value name
        value: String,
    },

    /// Schema declares no atoms at all
    #[error("schema declares no atoms")]
    EmptySchema,
}
