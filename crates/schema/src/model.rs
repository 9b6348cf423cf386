//! Compiled schema model
//!
//! The immutable intermediate representation between parsing and emission.
//! Declaration order is preserved everywhere: atoms, fields, and enum
//! values all iterate in the order the schema wrote them, which is what
//! makes emission reproducible.

/// A complete compiled schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaModel {
    atoms: Vec<AtomDefinition>,
}

impl SchemaModel {
    pub(crate) fn new(atoms: Vec<AtomDefinition>) -> Self {
        Self { atoms }
    }

    /// Atoms in declaration order
    pub fn atoms(&self) -> &[AtomDefinition] {
        &self.atoms
    }

    /// Find an atom by name
    pub fn atom(&self, name: &str) -> Option<&AtomDefinition> {
        self.atoms.iter().find(|atom| atom.name() == name)
    }

    /// Number of atoms
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the schema holds no atoms (never true for compiled output)
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// One structured telemetry event type with a numeric id and typed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomDefinition {
    id: u32,
    name: String,
    fields: Vec<FieldDefinition>,
}

impl AtomDefinition {
    pub(crate) fn new(id: u32, name: String, fields: Vec<FieldDefinition>) -> Self {
        Self { id, name, fields }
    }

    /// Numeric atom id, unique within the compiled schema
    #[inline]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Schema name (lower_snake_case)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order
    #[inline]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// One typed field of an atom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    name: String,
    field_type: FieldType,
}

impl FieldDefinition {
    pub(crate) fn new(name: String, field_type: FieldType) -> Self {
        Self { name, field_type }
    }

    /// Field name (lower_snake_case)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    #[inline]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Enum definition when this is an enum field
    #[inline]
    pub fn enum_definition(&self) -> Option<&EnumDefinition> {
        match &self.field_type {
            FieldType::Enum(definition) => Some(definition),
            _ => None,
        }
    }
}

/// Scalar and enum types an atom field can carry
///
/// Mirrors the scalar set the downstream writers know how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Boolean flag
    Bool,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// UTF-8 string
    String,
    /// Raw byte payload
    Bytes,
    /// Closed value set with implicit ordinals
    Enum(EnumDefinition),
}

impl FieldType {
    /// Get the schema-facing name of this type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum(_) => "enum",
        }
    }
}

/// Value set of one enum field
///
/// Ordinals are implicit: the first declared value is 0, the next 1, and so
/// on. By convention the schema reserves ordinal 0 for an `UNKNOWN` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    values: Vec<String>,
}

impl EnumDefinition {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Value names in declaration order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Ordinal of a value name, if declared
    pub fn ordinal(&self, value: &str) -> Option<u32> {
        self.values.iter().position(|v| v == value).map(|i| i as u32)
    }

    /// Iterate `(ordinal, value_name)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as u32, v.as_str()))
    }

    /// Number of declared values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for compiled output; validation rejects empty enums
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
