//! `xsd:anyURI`: absolute identifiers.

use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;
use crate::iri::Iri;

/// Kind name.
pub const KIND: &str = "anyURI";

/// Codec table for `xsd:anyURI`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes an IRI as its text.
#[must_use]
pub fn serialize(value: &Iri) -> Value {
    Value::String(value.as_str().to_owned())
}

/// Decodes a string holding an absolute IRI.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-strings and for strings that are not
/// absolute IRIs.
pub fn deserialize(value: &Value) -> Result<Iri, CodecError> {
    match value {
        Value::String(s) => Iri::parse(s.as_str())
            .map_err(|_| CodecError::decode(KIND, format!("{s:?} is not an absolute IRI"))),
        other => Err(CodecError::decode(
            KIND,
            format!("expected a string, found {}", shape(other)),
        )),
    }
}

/// Lexicographic order of the IRI text.
#[must_use]
pub fn less(a: &Iri, b: &Iri) -> bool {
    a.as_str() < b.as_str()
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::AnyUri(v) => Ok(serialize(v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::AnyUri)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::AnyUri(a), LiteralValue::AnyUri(b)) => less(a, b),
        _ => false,
    }
}
