//! Constant naming
//!
//! Every writer funnels through these helpers, which is what keeps the
//! generated targets in agreement: a binding differs between languages only
//! in surrounding syntax, never in name or value.

use tex_schema::AtomDefinition;

/// Mangle an identifier into an UPPER_SNAKE constant name
///
/// Lower snake input maps directly (`vendor_atom1` → `VENDOR_ATOM1`);
/// camelCase words are split with underscores (`vendorAtomId` →
/// `VENDOR_ATOM_ID`).
pub fn make_constant_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut underscore_next = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if underscore_next {
                result.push('_');
                underscore_next = false;
            }
            result.push(c);
        } else if c.is_ascii_lowercase() {
            underscore_next = true;
            result.push(c.to_ascii_uppercase());
        } else {
            if c == '_' {
                underscore_next = false;
            }
            result.push(c);
        }
    }
    result
}

/// Constant name for an atom id binding
pub fn atom_constant(atom: &AtomDefinition) -> String {
    make_constant_name(atom.name())
}

/// Constant name for one enum value binding
///
/// Shape: `<ATOM>__<FIELD>_<VALUE>`. The double underscore separates the
/// atom scope from the field scope; value names are already UPPER_SNAKE by
/// schema validation.
pub fn enum_value_constant(atom: &AtomDefinition, field: &str, value: &str) -> String {
    format!(
        "{}__{}_{}",
        make_constant_name(atom.name()),
        make_constant_name(field),
        value
    )
}
