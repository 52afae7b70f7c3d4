//! `xsd:duration`: the `P[nY][nM][nD][T[nH][nM][nS]]` subset.
//!
//! A duration here is a fixed span of time, so calendar units are
//! approximated: a year is 8760 hours (365 days) and a month is 720 hours
//! (30 days). Encoding greedily extracts years, months, and days, then
//! emits a `T` section only when a sub-day remainder is left. Decoding sums
//! each captured component using the same unit lengths, so a round trip is
//! exact up to those approximations. Sub-second precision is not carried.

use std::fmt::Write as FmtWrite;
use std::sync::OnceLock;

use chrono::Duration;
use regex::Regex;
use serde_json::Value;

use super::{mismatch, shape, LiteralCodec, LiteralValue};
use crate::error::CodecError;

/// Kind name.
pub const KIND: &str = "duration";

/// Codec table for `xsd:duration`.
pub const CODEC: LiteralCodec = LiteralCodec {
    kind: KIND,
    serialize: serialize_value,
    deserialize: deserialize_value,
    less: less_value,
};

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 720 * HOUR;
const YEAR: u64 = 8760 * HOUR;

fn pattern() -> Result<&'static Regex, CodecError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^P(\d+Y)?(\d+M)?(\d+D)?(T(\d+H)?(\d+M)?(\d+S)?)?$"))
        .as_ref()
        .map_err(|e| CodecError::decode(KIND, e.to_string()))
}

/// Formats a duration, e.g. `P1Y2M3DT4H5M6S` or `-P1D`.
#[must_use]
pub fn format(value: &Duration) -> String {
    let total = value.num_seconds();
    let mut out = String::from(if total < 0 { "-P" } else { "P" });
    let mut rest = total.unsigned_abs();
    for (unit, designator) in [(YEAR, 'Y'), (MONTH, 'M'), (DAY, 'D')] {
        let count = rest / unit;
        if count >= 1 {
            let _ = write!(out, "{count}{designator}");
            rest -= count * unit;
        }
    }
    if rest > 0 {
        out.push('T');
        for (unit, designator) in [(HOUR, 'H'), (MINUTE, 'M'), (SECOND, 'S')] {
            let count = rest / unit;
            if count >= 1 {
                let _ = write!(out, "{count}{designator}");
                rest -= count * unit;
            }
        }
    }
    out
}

/// Parses a duration string.
///
/// # Errors
///
/// Returns [`CodecError::Format`] if the text (after an optional `-`) does not
/// start with `P` or does not match the supported grammar, and
/// [`CodecError::Decode`] if the total overflows.
pub fn parse(text: &str) -> Result<Duration, CodecError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if !body.starts_with('P') {
        return Err(CodecError::format(KIND, text));
    }
    let captures = pattern()?
        .captures(body)
        .ok_or_else(|| CodecError::format(KIND, text))?;

    let overflow = || CodecError::decode(KIND, format!("{text:?} overflows"));
    let mut seconds: u64 = 0;
    for (group, unit) in [(1, YEAR), (2, MONTH), (3, DAY), (5, HOUR), (6, MINUTE), (7, SECOND)] {
        let Some(component) = captures.get(group) else {
            continue;
        };
        let digits = component.as_str();
        let count: u64 = digits[..digits.len() - 1]
            .parse()
            .map_err(|_| overflow())?;
        seconds = count
            .checked_mul(unit)
            .and_then(|v| seconds.checked_add(v))
            .ok_or_else(overflow)?;
    }

    let seconds = i64::try_from(seconds).map_err(|_| overflow())?;
    let seconds = if negative { -seconds } else { seconds };
    Duration::try_seconds(seconds).ok_or_else(overflow)
}

/// Encodes a duration.
#[must_use]
pub fn serialize(value: &Duration) -> Value {
    Value::String(format(value))
}

/// Decodes a duration string.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for non-strings and the errors of [`parse`].
pub fn deserialize(value: &Value) -> Result<Duration, CodecError> {
    match value {
        Value::String(s) => parse(s),
        other => Err(CodecError::decode(
            KIND,
            format!("expected a string, found {}", shape(other)),
        )),
    }
}

/// Shorter spans order first; negative spans precede positive ones.
#[must_use]
pub fn less(a: &Duration, b: &Duration) -> bool {
    a < b
}

fn serialize_value(value: &LiteralValue) -> Result<Value, CodecError> {
    match value {
        LiteralValue::Duration(v) => Ok(serialize(v)),
        other => Err(mismatch(KIND, other)),
    }
}

fn deserialize_value(value: &Value) -> Result<LiteralValue, CodecError> {
    deserialize(value).map(LiteralValue::Duration)
}

fn less_value(a: &LiteralValue, b: &LiteralValue) -> bool {
    match (a, b) {
        (LiteralValue::Duration(a), LiteralValue::Duration(b)) => less(a, b),
        _ => false,
    }
}
