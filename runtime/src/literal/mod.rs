//! Literal value codec delegates.
//!
//! One module per primitive kind. Each module exposes `serialize`,
//! `deserialize`, and `less` over the kind's native representation, plus a
//! [`LiteralCodec`] table (`CODEC`) that lifts the three functions over
//! [`LiteralValue`] so the property engine can drive them without knowing the
//! concrete type.
//!
//! `less` is a stable total order used to canonicalize multi-valued
//! properties. It carries no business meaning.

pub mod any_uri;
pub mod boolean;
pub mod date_time;
pub mod duration;
pub mod float;
pub mod lang_string;
pub mod language;
pub mod non_negative_integer;
pub mod string;

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset};
use serde_json::Value;

use crate::error::CodecError;
use crate::iri::Iri;

/// A decoded literal of one of the built-in primitive kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `xsd:anyURI`.
    AnyUri(Iri),
    /// `xsd:dateTime`.
    DateTime(DateTime<FixedOffset>),
    /// `xsd:float`.
    Float(f64),
    /// `xsd:string`.
    String(String),
    /// `xsd:boolean`.
    Boolean(bool),
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger(u64),
    /// `xsd:duration`.
    Duration(Duration),
    /// `xsd:language`, a BCP-47 language tag.
    Language(String),
    /// `rdf:langString`, a map from language tag to text.
    LangString(BTreeMap<String, String>),
}

impl LiteralValue {
    /// Returns the name of the codec that handles this value.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            LiteralValue::AnyUri(_) => any_uri::KIND,
            LiteralValue::DateTime(_) => date_time::KIND,
            LiteralValue::Float(_) => float::KIND,
            LiteralValue::String(_) => string::KIND,
            LiteralValue::Boolean(_) => boolean::KIND,
            LiteralValue::NonNegativeInteger(_) => non_negative_integer::KIND,
            LiteralValue::Duration(_) => duration::KIND,
            LiteralValue::Language(_) => language::KIND,
            LiteralValue::LangString(_) => lang_string::KIND,
        }
    }
}

/// Function table for one literal kind.
#[derive(Debug, Clone, Copy)]
pub struct LiteralCodec {
    /// Kind name; equals [`LiteralValue::kind_name`] of the values it accepts.
    pub kind: &'static str,
    /// Encodes a value to its wire form.
    pub serialize: fn(&LiteralValue) -> Result<Value, CodecError>,
    /// Decodes a wire value.
    pub deserialize: fn(&Value) -> Result<LiteralValue, CodecError>,
    /// Stable ordering between two values of this kind.
    pub less: fn(&LiteralValue, &LiteralValue) -> bool,
}

impl LiteralCodec {
    /// Returns true if `value` is of the variant this codec handles.
    #[must_use]
    pub fn accepts(&self, value: &LiteralValue) -> bool {
        value.kind_name() == self.kind
    }
}

/// Builds the encode error for a value handed to the wrong codec.
pub(crate) fn mismatch(kind: &'static str, value: &LiteralValue) -> CodecError {
    CodecError::encode(kind, format!("value holds a {}", value.kind_name()))
}

/// Names the JSON shape of `value` for error messages.
pub(crate) fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
