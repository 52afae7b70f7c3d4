//! `xsd:float`, carried as `f64`.

use serde_json::{Number, Value};

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "float";

/// Codec table for `xsd:float`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes a float.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] for NaN and infinities, which JSON cannot
/// carry.
pub fn serialize(value: f64) -> Result<Value, CodecError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| CodecError::encode(KIND, format!("{value} has no JSON representation")))
}

/// Decodes any JSON number.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-numbers.
pub fn deserialize(value: &Value) -> Result<f64, CodecError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CodecError::decode(KIND, format!("{n} is not representable as f64"))),
        other => Err(CodecError::decode(
            KIND,
            format!("expected a number, found {}", shape(other)),
        )),
    }
}

/// Numeric order; `total_cmp` keeps it total in the presence of NaN.
#[must_use]
pub fn less(a: f64, b: f64) -> bool {
    a.total_cmp(&b).is_lt()
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::Float(v) => serialize(*v),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::Float)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::Float(a), LiteralValue::Float(b)) => less(*a, *b),
        _ => false,
    }
}
