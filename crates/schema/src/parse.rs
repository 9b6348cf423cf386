//! Schema parsing and validation
//!
//! Stage one deserializes raw TOML shapes; stage two validates them into
//! the immutable model. Any violation fails the whole compilation.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::model::{AtomDefinition, EnumDefinition, FieldDefinition, FieldType, SchemaModel};
use crate::{Result, SchemaError, VENDOR_ATOM_ID_MAX, VENDOR_ATOM_ID_MIN};

/// Raw serde shape of one schema document
#[derive(Debug, Default, Deserialize)]
struct RawSchema {
    #[serde(default, rename = "atom")]
    atoms: Vec<RawAtom>,
}

/// Raw serde shape of one atom declaration
#[derive(Debug, Deserialize)]
struct RawAtom {
    name: String,
    id: u32,
    #[serde(default, rename = "field")]
    fields: Vec<RawField>,
}

/// Raw serde shape of one field declaration
#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    field_type: RawFieldType,
    /// enum value names in declaration order; only valid for `type = "enum"`
    values: Option<Vec<String>>,
}

/// Field type keyword as written in the schema
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawFieldType {
    Bool,
    Int32,
    Int64,
    Float,
    Double,
    String,
    Bytes,
    Enum,
}

/// Compile a schema document into the validated model
///
/// # Errors
///
/// Any parse or validation failure aborts the whole compilation; no
/// partial model is produced.
pub fn compile(text: &str) -> Result<SchemaModel> {
    let raw: RawSchema = toml::from_str(text)?;
    validate(raw)
}

impl SchemaModel {
    /// Compile a schema from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        compile(&contents)
    }
}

fn validate(raw: RawSchema) -> Result<SchemaModel> {
    if raw.atoms.is_empty() {
        return Err(SchemaError::EmptySchema);
    }

    let mut ids_seen: HashMap<u32, String> = HashMap::new();
    let mut names_seen: HashSet<String> = HashSet::new();
    let mut atoms = Vec::with_capacity(raw.atoms.len());

    for atom in raw.atoms {
        debug!(atom = %atom.name, id = atom.id, "validating atom");

        if !is_lower_snake(&atom.name) {
            return Err(SchemaError::InvalidAtomName { name: atom.name });
        }
        if !names_seen.insert(atom.name.clone()) {
            return Err(SchemaError::DuplicateAtomName { name: atom.name });
        }
        if !(VENDOR_ATOM_ID_MIN..=VENDOR_ATOM_ID_MAX).contains(&atom.id) {
            return Err(SchemaError::IdOutOfVendorRange {
                atom: atom.name,
                id: atom.id,
                min: VENDOR_ATOM_ID_MIN,
                max: VENDOR_ATOM_ID_MAX,
            });
        }
        if let Some(first) = ids_seen.insert(atom.id, atom.name.clone()) {
            return Err(SchemaError::DuplicateAtomId {
                id: atom.id,
                first,
                second: atom.name,
            });
        }

        let fields = validate_fields(&atom.name, atom.fields)?;
        atoms.push(AtomDefinition::new(atom.id, atom.name, fields));
    }

    Ok(SchemaModel::new(atoms))
}

fn validate_fields(atom: &str, raw_fields: Vec<RawField>) -> Result<Vec<FieldDefinition>> {
    let mut field_names: HashSet<String> = HashSet::new();
    let mut fields = Vec::with_capacity(raw_fields.len());

    for field in raw_fields {
        if !is_lower_snake(&field.name) {
            return Err(SchemaError::InvalidFieldName {
                atom: atom.to_string(),
                field: field.name,
            });
        }
        if !field_names.insert(field.name.clone()) {
            return Err(SchemaError::DuplicateFieldName {
                atom: atom.to_string(),
                field: field.name,
            });
        }

        let field_type = match field.field_type {
            RawFieldType::Enum => {
                let values = field.values.unwrap_or_default();
                FieldType::Enum(validate_enum(atom, &field.name, values)?)
            }
            other => {
                if field.values.is_some() {
                    return Err(SchemaError::UnexpectedEnumValues {
                        atom: atom.to_string(),
                        field: field.name,
                    });
                }
                scalar_type(other)
            }
        };
        fields.push(FieldDefinition::new(field.name, field_type));
    }

    Ok(fields)
}

fn validate_enum(atom: &str, field: &str, values: Vec<String>) -> Result<EnumDefinition> {
    if values.is_empty() {
        return Err(SchemaError::EmptyEnum {
            atom: atom.to_string(),
            field: field.to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for value in &values {
        if !is_upper_snake(value) {
            return Err(SchemaError::InvalidEnumValue {
                atom: atom.to_string(),
                field: field.to_string(),
                value: value.clone(),
            });
        }
        if !seen.insert(value) {
            return Err(SchemaError::DuplicateEnumValue {
                atom: atom.to_string(),
                field: field.to_string(),
                value: value.clone(),
            });
        }
    }

    Ok(EnumDefinition::new(values))
}

fn scalar_type(raw: RawFieldType) -> FieldType {
    match raw {
        RawFieldType::Bool => FieldType::Bool,
        RawFieldType::Int32 => FieldType::Int32,
        RawFieldType::Int64 => FieldType::Int64,
        RawFieldType::Float => FieldType::Float,
        RawFieldType::Double => FieldType::Double,
        RawFieldType::String => FieldType::String,
        RawFieldType::Bytes => FieldType::Bytes,
        // enum handled by the caller before reaching here
        RawFieldType::Enum => FieldType::Enum(EnumDefinition::new(Vec::new())),
    }
}

/// `[a-z][a-z0-9_]*`
fn is_lower_snake(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `[A-Z][A-Z0-9_]*`
fn is_upper_snake(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
