//! Service alert (`add_info`) responses.

use super::fields::{Lookup, Shown, clipped};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const SUBTITLE_CHARS_SHOWN: usize = 60;
const URL_CHARS_SHOWN: usize = 50;

pub fn summarize(doc: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Version: {}", Shown(doc.at("version")))?;
    writeln!(out, "Timestamp: {}", Shown(doc.at("timestamp")))?;

    let infos = doc.at("infos");
    let current = infos.items("current");
    writeln!(out, "Current alerts count: {}", current.len())?;

    let affected = infos.at("affected");
    writeln!(out, "Total affected stops: {}", affected.count("stops"))?;
    writeln!(out, "Total affected lines: {}", affected.count("lines"))?;

    let Some(alert) = current.first() else {
        return Ok(());
    };

    writeln!(out, "\nFirst alert structure:")?;
    for key in ["id", "version", "type", "priority"] {
        writeln!(out, "  - {key}: {}", Shown(alert.at(key)))?;
    }
    writeln!(
        out,
        "  - subtitle: {}",
        clipped(alert.at("subtitle"), "N/A", SUBTITLE_CHARS_SHOWN)
    )?;
    writeln!(out, "  - content length: {}", alert.count("content"))?;
    writeln!(
        out,
        "  - url: {}",
        clipped(alert.at("url"), "N/A", URL_CHARS_SHOWN)
    )?;

    let ts = alert.at("timestamps");
    writeln!(out, "  - timestamps.creation: {}", Shown(ts.at("creation")))?;
    writeln!(
        out,
        "  - timestamps.lastModification: {}",
        Shown(ts.at("lastModification"))
    )?;
    writeln!(out, "  - timestamps.validity count: {}", ts.count("validity"))?;

    let alert_affected = alert.at("affected");
    writeln!(out, "  - affected.lines count: {}", alert_affected.count("lines"))?;
    writeln!(out, "  - affected.stops count: {}", alert_affected.count("stops"))?;

    writeln!(
        out,
        "  - properties keys: {:?}",
        alert.key_names("properties", usize::MAX)
    )?;

    Ok(())
}
