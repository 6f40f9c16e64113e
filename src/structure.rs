//! Generic key-path dump of a JSON document.
//!
//! Every object key becomes a dotted path (`journeys[0].legs`) mapped to a
//! short description of the value found there. Arrays are described by their
//! length and, when the first element is an object, that element is walked as
//! `path[0]`. Walking stops once the depth limit is exceeded.

use indexmap::IndexMap;
use serde_json::Value;

/// Default number of nested levels walked below the root.
pub const DEFAULT_MAX_DEPTH: usize = 4;

const SCALAR_PREVIEW_CHARS: usize = 50;

/// Path string to value description, in document order.
pub type StructureMap = IndexMap<String, String>;

/// Describes `document` using [`DEFAULT_MAX_DEPTH`].
pub fn analyze_structure(document: &Value) -> StructureMap {
    analyze_structure_with_depth(document, DEFAULT_MAX_DEPTH)
}

/// Describes `document`, walking no deeper than `max_depth` levels below the root.
///
/// Never fails: non-object roots and empty containers just produce fewer entries.
pub fn analyze_structure_with_depth(document: &Value, max_depth: usize) -> StructureMap {
    let mut structure = StructureMap::new();
    walk(document, "", 0, max_depth, &mut structure);
    structure
}

fn walk(value: &Value, prefix: &str, depth: usize, max_depth: usize, out: &mut StructureMap) {
    if depth > max_depth {
        return;
    }

    let Value::Object(fields) = value else {
        return;
    };

    for (key, child) in fields {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match child {
            Value::Object(inner) => {
                out.insert(path.clone(), format!("object ({} keys)", inner.len()));
                walk(child, &path, depth + 1, max_depth, out);
            }
            Value::Array(items) => match items.first() {
                None => {
                    out.insert(path, "array (empty)".to_string());
                }
                Some(first) => {
                    out.insert(path.clone(), format!("array ({} items)", items.len()));
                    if first.is_object() {
                        walk(first, &format!("{path}[0]"), depth + 1, max_depth, out);
                    }
                }
            },
            scalar => {
                out.insert(path, describe_scalar(scalar));
            }
        }
    }
}

fn describe_scalar(value: &Value) -> String {
    let kind = match value {
        Value::String(_) => "string",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        _ => "null",
    };
    let preview: String = value
        .to_string()
        .chars()
        .take(SCALAR_PREVIEW_CHARS)
        .collect();
    format!("{kind}: {preview}")
}
