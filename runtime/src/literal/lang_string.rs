//! `rdf:langString`: natural language text keyed by language tag.
//!
//! On the wire this is the JSON-LD language map form:
//! `{"en": "A note", "fr": "Une note"}`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "langString";

/// Codec table for `rdf:langString`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes a language map.
#[must_use]
pub fn serialize(value: &BTreeMap<String, String>) -> Value {
    let map: Map<String, Value> = value
        .iter()
        .map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
        .collect();
    Value::Object(map)
}

/// Decodes a JSON object whose values are all strings.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-objects or non-string entries.
pub fn deserialize(value: &Value) -> Result<BTreeMap<String, String>, CodecError> {
    let Value::Object(map) = value else {
        return Err(CodecError::decode(
            KIND,
            format!("expected an object, found {}", shape(value)),
        ));
    };
    map.iter()
        .map(|(lang, text)| match text {
            Value::String(s) => Ok((lang.clone(), s.clone())),
            other => Err(CodecError::decode(
                KIND,
                format!("entry {lang:?} holds a {}", shape(other)),
            )),
        })
        .collect()
}

/// Orders by the sorted sequence of `(language, text)` pairs.
#[must_use]
pub fn less(a: &BTreeMap<String, String>, b: &BTreeMap<String, String>) -> bool {
    a < b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::LangString(v) => Ok(serialize(v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::LangString)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::LangString(a), LiteralValue::LangString(b)) => less(a, b),
        _ => false,
    }
}
