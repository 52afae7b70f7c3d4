//! `xsd:language`: BCP-47 language tags such as `en` or `zh-Hant-TW`.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "language";

/// Codec table for `xsd:language`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

fn pattern() -> Result<&'static Regex, CodecError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$"))
        .as_ref()
        .map_err(|e| CodecError::decode(KIND, e.to_string()))
}

/// Returns true if `tag` is a syntactically valid language tag.
#[must_use]
pub fn is_valid(tag: &str) -> bool {
    pattern().map(|re| re.is_match(tag)).unwrap_or(false)
}

/// Encodes a language tag.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if `value` is not a valid tag.
pub fn serialize(value: &str) -> Result<Value, CodecError> {
    if is_valid(value) {
        Ok(Value::String(value.to_owned()))
    } else {
        Err(CodecError::encode(KIND, format!("{value:?} is not a language tag")))
    }
}

/// Decodes a language tag.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-strings and [`CodecError::Format`]
/// for strings that are not language tags.
pub fn deserialize(value: &Value) -> Result<String, CodecError> {
    match value {
        Value::String(s) if is_valid(s) => Ok(s.clone()),
        Value::String(s) => Err(CodecError::format(KIND, s.as_str())),
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
        LiteralValue::Language(v) => serialize(v),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::Language)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::Language(a), LiteralValue::Language(b)) => less(a, b),
        _ => false,
    }
}
