//! Departure board (`departure_mon`) responses.

use super::fields::{Lookup, Shown};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const LOCATION_PROPERTY_KEYS_SHOWN: usize = 5;

pub fn summarize(doc: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Version: {}", Shown(doc.at("version")))?;
    writeln!(out, "Locations count: {}", doc.items("locations").len())?;

    let stop_events = doc.items("stopEvents");
    writeln!(out, "Stop events count: {}", stop_events.len())?;

    let Some(event) = stop_events.first() else {
        return Ok(());
    };

    writeln!(out, "\nFirst stop event structure:")?;
    for key in [
        "departureTimePlanned",
        "departureTimeEstimated",
        "isRealtimeControlled",
    ] {
        writeln!(out, "  - {key}: {}", Shown(event.at(key)))?;
    }

    let loc = event.at("location");
    writeln!(out, "  - location.name: {}", Shown(loc.at("name")))?;
    writeln!(out, "  - location.type: {}", Shown(loc.at("type")))?;
    writeln!(
        out,
        "  - location.properties: {:?}",
        loc.key_names("properties", LOCATION_PROPERTY_KEYS_SHOWN)
    )?;

    let trans = event.at("transportation");
    writeln!(out, "  - transportation.number: {}", Shown(trans.at("number")))?;
    writeln!(out, "  - transportation.name: {}", Shown(trans.at("name")))?;
    writeln!(out, "  - transportation.iconId: {}", Shown(trans.at("iconId")))?;
    writeln!(
        out,
        "  - transportation.product.class: {}",
        Shown(trans.at("product").at("class"))
    )?;
    writeln!(
        out,
        "  - transportation.destination.name: {}",
        Shown(trans.at("destination").at("name"))
    )?;

    writeln!(out, "  - infos count: {}", event.items("infos").len())?;

    let onwards = event.items("onwardLocations");
    if let Some(first) = onwards.first() {
        writeln!(out, "  - onwardLocations count: {}", onwards.len())?;
        writeln!(out, "    - first onwards: {}", Shown(first.at("name")))?;
        writeln!(
            out,
            "    - properties: {:?}",
            first.key_names("properties", usize::MAX)
        )?;
    }

    Ok(())
}
