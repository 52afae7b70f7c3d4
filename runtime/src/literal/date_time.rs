//! `xsd:dateTime`: RFC 3339 timestamps with an explicit offset.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "dateTime";

/// Codec table for `xsd:dateTime`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

/// Encodes a timestamp in RFC 3339 form, using `Z` for UTC.
#[must_use]
pub fn serialize(value: &DateTime<FixedOffset>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Decodes an RFC 3339 timestamp.
///
/// Timestamps that omit seconds (`2019-03-04T05:06Z`) are accepted as well;
/// several implementations emit them.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-strings and [`CodecError::Format`]
/// for strings in neither form.
pub fn deserialize(value: &Value) -> Result<DateTime<FixedOffset>, CodecError> {
    let Value::String(text) = value else {
        return Err(CodecError::decode(
            KIND,
            format!("expected a string, found {}", shape(value)),
        ));
    };
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| parse_without_seconds(text))
        .map_err(|_| CodecError::format(KIND, text.as_str()))
}

fn parse_without_seconds(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let normalized = match text.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => text.to_owned(),
    };
    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z")
}

/// Chronological order.
#[must_use]
pub fn less(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
    a < b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::DateTime(v) => Ok(serialize(v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::DateTime)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::DateTime(a), LiteralValue::DateTime(b)) => less(a, b),
        _ => false,
    }
}
