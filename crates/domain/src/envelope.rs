//! Helpers for reading `{"data": ...}` response envelopes.
//!
//! Every dashboard endpoint wraps its payload in a `data` member. These
//! functions look inside that envelope without panicking on unexpected
//! shapes; a missing or mistyped member simply yields `None` / `false`.

use serde_json::Value;

/// Returns the `data` member of an envelope.
#[must_use]
pub fn data(body: &Value) -> Option<&Value> {
    body.get("data")
}

/// Returns the `data` member when it is an array.
#[must_use]
pub fn data_list(body: &Value) -> Option<&[Value]> {
    data(body).and_then(Value::as_array).map(Vec::as_slice)
}

/// Returns the names from `fields` that `object` does not contain.
#[must_use]
pub fn missing_fields<'a>(object: &Value, fields: &[&'a str]) -> Vec<&'a str> {
    fields
        .iter()
        .copied()
        .filter(|field| object.get(field).is_none())
        .collect()
}

/// Returns true if every item carries the string `expected` under `key`.
///
/// Items lacking the key, or holding a non-string there, do not match.
#[must_use]
pub fn all_match(items: &[Value], key: &str, expected: &str) -> bool {
    items
        .iter()
        .all(|item| item.get(key).and_then(Value::as_str) == Some(expected))
}

/// Returns the numeric member `key` of `object` as `f64`.
#[must_use]
pub fn number(object: &Value, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

/// Returns the string member `key` of `object`.
#[must_use]
pub fn text<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Renders an identifier for use in a URL path segment.
///
/// Strings are used verbatim; numbers keep their JSON spelling. Other shapes
/// are not usable as identifiers.
#[must_use]
pub fn id_segment(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
