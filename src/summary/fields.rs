//! Optional lookups over loosely-typed response documents.
//!
//! Lookups never fail: a missing key, or a key on something that is not an
//! object, resolves to JSON `null`, and collections read from `null` are empty.

use serde_json::Value;
use std::fmt;

pub(crate) static NULL: Value = Value::Null;

/// Defaulting accessors for [`Value`].
pub trait Lookup {
    /// Value at `key`, or `null` when absent.
    fn at(&self, key: &str) -> &Value;

    /// Array at `key`, or an empty slice.
    fn items(&self, key: &str) -> &[Value];

    /// Length of the array, object or string at `key`; 0 for anything else.
    fn count(&self, key: &str) -> usize;

    /// Up to `limit` key names of the object at `key`.
    fn key_names(&self, key: &str, limit: usize) -> Vec<&str>;
}

impl Lookup for Value {
    fn at(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }

    fn items(&self, key: &str) -> &[Value] {
        self.at(key).as_array().map(Vec::as_slice).unwrap_or_default()
    }

    fn count(&self, key: &str) -> usize {
        match self.at(key) {
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            Value::String(s) => s.chars().count(),
            _ => 0,
        }
    }

    fn key_names(&self, key: &str, limit: usize) -> Vec<&str> {
        self.at(key)
            .as_object()
            .map(|fields| fields.keys().take(limit).map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Renders a value for a summary line: strings bare, everything else as JSON.
pub struct Shown<'a>(pub &'a Value);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Text of `value` cut to `max_chars`, or `default` when it is `null`.
pub fn clipped(value: &Value, default: &str, max_chars: usize) -> String {
    let text = match value {
        Value::Null => default.to_string(),
        other => Shown(other).to_string(),
    };
    text.chars().take(max_chars).collect()
}
