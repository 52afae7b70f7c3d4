//! `xsd:nonNegativeInteger`, carried as `u64`.

use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "nonNegativeInteger";

/// Codec table for `xsd:nonNegativeInteger`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes an integer.
#[must_use]
pub fn serialize(value: u64) -> Value {
    Value::from(value)
}

/// Decodes a non-negative JSON number without a fractional part.
///
/// Producers that only have floating point numbers emit `3.0` for `3`;
/// such values are accepted.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for negative or fractional numbers and for
/// non-numbers.
pub fn deserialize(value: &Value) -> Result<u64, CodecError> {
    let Value::Number(n) = value else {
        return Err(CodecError::decode(
            KIND,
            format!("expected a number, found {}", shape(value)),
        ));
    };
    if let Some(u) = n.as_u64() {
        return Ok(u);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(CodecError::decode(
            KIND,
            format!("{n} is not a non-negative integer"),
        )),
    }
}

/// Numeric order.
#[must_use]
pub fn less(a: u64, b: u64) -> bool {
    a < b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::NonNegativeInteger(v) => Ok(serialize(*v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::NonNegativeInteger)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::NonNegativeInteger(a), LiteralValue::NonNegativeInteger(b)) => less(*a, *b),
        _ => false,
    }
}
