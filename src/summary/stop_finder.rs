//! Stop search (`stop_finder`) responses.

use super::fields::{Lookup, NULL, Shown};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const PROPERTY_KEYS_SHOWN: usize = 10;

pub fn summarize(doc: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Version: {}", Shown(doc.at("version")))?;

    let locations = doc.items("locations");
    writeln!(out, "Locations count: {}", locations.len())?;

    let Some(loc) = locations.first() else {
        return Ok(());
    };

    writeln!(out, "\nFirst location structure:")?;
    for key in [
        "id",
        "name",
        "disassembledName",
        "type",
        "coord",
        "modes",
        "matchQuality",
        "isBest",
    ] {
        writeln!(out, "  - {key}: {}", Shown(loc.at(key)))?;
    }

    let parent = loc.at("parent");
    let parent_name = if is_present(parent) {
        parent.at("name")
    } else {
        &NULL
    };
    writeln!(out, "  - parent: {}", Shown(parent_name))?;

    if loc.count("properties") > 0 {
        writeln!(
            out,
            "  - properties keys: {:?}",
            loc.key_names("properties", PROPERTY_KEYS_SHOWN)
        )?;
    }

    Ok(())
}

/// Non-null and, for collections and strings, non-empty.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(fields) => !fields.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
