//! `xsd:boolean`.
//!
//! Accepts native JSON booleans and, for compatibility with producers that
//! encode flags numerically, the numbers `0` and `1`.

use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "boolean";

/// Codec table for `xsd:boolean`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes a boolean.
#[must_use]
pub fn serialize(value: bool) -> Value {
    Value::Bool(value)
}

/// Decodes a boolean, or the number `0` or `1`.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for any other number or JSON shape.
pub fn deserialize(value: &Value) -> Result<bool, CodecError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Ok(false),
            Some(f) if f == 1.0 => Ok(true),
            _ => Err(CodecError::decode(
                KIND,
                format!("number {n} is neither 0 nor 1"),
            )),
        },
        other => Err(CodecError::decode(
            KIND,
            format!("expected a boolean or 0/1, found {}", shape(other)),
        )),
    }
}

/// `false` orders before `true`.
#[must_use]
pub fn less(a: bool, b: bool) -> bool {
    !a && b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::Boolean(v) => Ok(serialize(*v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::Boolean)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => less(*a, *b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn accepts_numeric_flags() {
        assert!(!deserialize(&json!(0)).unwrap());
        assert!(deserialize(&json!(1)).unwrap());
        assert!(deserialize(&json!(1.0)).unwrap());
    }

    #[test]
    fn rejects_other_numbers_and_strings() {
        let err = deserialize(&json!(2)).unwrap_err();
        assert!(err.to_string().contains("neither 0 nor 1"), "{err}");
        assert!(deserialize(&json!("true")).is_err());
        assert!(deserialize(&json!(null)).is_err());
    }

    #[test]
    fn false_before_true() {
        assert!(less(false, true));
        assert!(!less(true, false));
        assert!(!less(true, true));
    }

    proptest! {
        #[test]
        fn round_trips(b in any::<bool>()) {
            prop_assert_eq!(deserialize(&serialize(b)).unwrap(), b);
        }
    }
}
