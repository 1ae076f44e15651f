//! Coercion of loosely-typed JSON bodies into core requests.
//!
//! Clients send numbers, numeric strings, booleans or floats for the same
//! field. Everything is turned into integers here, before the match is
//! touched; anything that cannot be coerced is [`ApiError::MalformedInput`].

use crate::error::ApiError;
use cube_tictactoe::{MoveRequest, Slot};
use serde_json::{Map, Value};
use tracing::instrument;

/// Parses a raw body into a JSON value that carries content.
///
/// Non-JSON bodies and empty values (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// count as no body at all.
pub fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MISSING_JSON)?;
    if is_truthy(&value) {
        Ok(value)
    } else {
        Err(ApiError::MISSING_JSON)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Coerces a JSON value to an integer.
///
/// Accepts integers, finite floats (truncated toward zero), booleans and
/// strings holding an integer with optional sign, surrounding whitespace and
/// `_` separators between digits. Values beyond the `i64` range saturate, so
/// they still reach the bounds and turn checks.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_str(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_int_str(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = digits.as_bytes();
    let well_formed = bytes.first().is_some_and(u8::is_ascii_digit)
        && bytes.last().is_some_and(u8::is_ascii_digit)
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_')
        && !digits.contains("__");
    if !well_formed {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let signed = if negative { format!("-{}", cleaned) } else { cleaned };
    // Only overflow can fail past the shape check.
    Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

fn int_field(fields: &Map<String, Value>, key: &str) -> Result<i64, ApiError> {
    fields
        .get(key)
        .and_then(coerce_int)
        .ok_or(ApiError::INVALID_FIELDS)
}

/// Builds a [`MoveRequest`] from a `/move` body.
#[instrument(skip(body), fields(len = body.len()))]
pub fn parse_move(body: &[u8]) -> Result<MoveRequest, ApiError> {
    let value = parse_body(body)?;
    let fields = value.as_object().ok_or(ApiError::INVALID_FIELDS)?;

    Ok(MoveRequest::new(
        int_field(fields, "player")?,
        int_field(fields, "z")?,
        int_field(fields, "y")?,
        int_field(fields, "x")?,
    ))
}

/// Reads the slot named by a `/disconnect` body, if it names one.
///
/// Only the JSON numbers `0` and `1` (integral floats included) and booleans
/// name a slot. Anything else, including an unreadable body, names none.
pub fn parse_disconnect(body: &[u8]) -> Option<Slot> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("player_id")? {
        Value::Bool(b) => Slot::from_id(i64::from(*b)),
        Value::Number(n) => {
            let f = n.as_f64()?;
            (f.fract() == 0.0).then(|| Slot::from_id(f as i64)).flatten()
        }
        _ => None,
    }
}
