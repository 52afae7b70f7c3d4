//! Vocabulary → Rust mapping tables.
//!
//! Deterministic mappings from vocabulary names to Rust identifiers,
//! modules, and types.

use ontogen_spec::{Kind, PropertyDef};

/// Rust keywords that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "yield",
];

/// Converts a camelCase or PascalCase name into a snake_case Rust identifier.
///
/// Characters that cannot appear in an identifier become `_`; keywords get a
/// trailing `_`.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore inside an acronym (e.g. "anyURI" → "any_uri")
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch.is_alphanumeric() || ch == '_' {
            result.push(ch);
        } else {
            result.push('_');
        }
        prev = Some(ch);
    }
    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    if KEYWORDS.contains(&result.as_str()) {
        result.push('_');
    }
    result
}

/// Converts a name into a SCREAMING_SNAKE_CASE constant name.
pub fn to_const_name(s: &str) -> String {
    to_snake_case(s).trim_end_matches('_').to_uppercase()
}

/// Identifiers generated for one kind of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindIdent {
    /// Kind name as declared.
    pub name: String,
    /// Position in the property's kind list.
    pub index: usize,
    /// Suffix of accessor functions (`is_<suffix>`, `set_<suffix>`, ...).
    pub suffix: String,
    /// Name of the kind index constant.
    pub constant: String,
}

/// Returns accessor identifiers for every kind of `property`, in kind order.
///
/// Kinds whose names map to the same identifier are told apart by a
/// positional suffix on every occurrence after the first.
pub fn kind_idents(property: &PropertyDef) -> Vec<KindIdent> {
    let mut out: Vec<KindIdent> = Vec::with_capacity(property.kinds.len());
    for (index, kind) in property.kinds.iter().enumerate() {
        let mut suffix = to_snake_case(kind.name()).trim_end_matches('_').to_owned();
        if out.iter().any(|k| k.suffix == suffix) {
            suffix = format!("{suffix}_{index}");
        }
        out.push(KindIdent {
            name: kind.name().to_owned(),
            index,
            constant: suffix.to_uppercase(),
            suffix,
        });
    }
    out
}

/// Returns the Rust type a getter of `kind` borrows and a setter takes.
pub fn kind_rust_type(kind: &Kind) -> &str {
    match kind {
        Kind::Value(v) => v.definition_type,
        Kind::Class(_) => "Aggregate",
    }
}

/// Returns the module name of a property or class unit.
pub fn module_name(name: &str) -> String {
    to_snake_case(name)
}

/// Returns the accessor name of a property on a class unit.
///
/// `new` is reserved for the constructor.
pub fn accessor_name(property: &str) -> String {
    let name = to_snake_case(property);
    if name == "new" {
        "new_".to_owned()
    } else {
        name
    }
}

/// Returns the mutable accessor name of a property on a class unit.
pub fn accessor_mut_name(property: &str) -> String {
    format!("{}_mut", accessor_name(property).trim_end_matches('_'))
}
