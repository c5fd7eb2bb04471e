//! Compact JSON serialization for header and payload segments.

use serde_json::{Map, Value};

use crate::error::{DecodeErrorKind, Result};

/// Serializes a mapping to compact JSON, keys in insertion order.
#[must_use]
pub fn encode_json(value: &Map<String, Value>) -> String {
    // String-keyed maps of `Value` always serialize.
    serde_json::to_string(value).unwrap_or_default()
}

/// Parses a decoded segment into a mapping.
///
/// A top-level `null` yields `None`. Any other non-object, or any parse
/// failure, is reported as an invalid segment encoding.
pub fn decode_json(encoded: &[u8]) -> Result<Option<Map<String, Value>>> {
    match serde_json::from_slice::<Value>(encoded) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(Value::Null) => Ok(None),
        Ok(_) | Err(_) => Err(DecodeErrorKind::InvalidEncoding.into()),
    }
}
