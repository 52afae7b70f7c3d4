//! `xsd:string`: plain character strings.

use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "string";

/// Codec table for `xsd:string`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes a string.
#[must_use]
pub fn serialize(value: &str) -> Value {
    Value::String(value.to_owned())
}

/// Decodes a JSON string.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for any other JSON shape.
pub fn deserialize(value: &Value) -> Result<String, CodecError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(CodecError::decode(
            KIND,
            format!("expected a string, found {}", shape(other)),
        )),
    }
}

/// Lexicographic order.
#[must_use]
pub fn less(a: &str, b: &str) -> bool {
    a < b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::String(v) => Ok(serialize(v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::String)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::String(a), LiteralValue::String(b)) => less(a, b),
        _ => false,
    }
}
