//! Journey planning (`trip`) responses.

use super::fields::{Lookup, Shown, clipped};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const TICKET_PROPERTY_KEYS_SHOWN: usize = 8;
const ALERT_CHARS_SHOWN: usize = 60;

pub fn summarize(doc: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Version: {}", Shown(doc.at("version")))?;

    let journeys = doc.items("journeys");
    writeln!(out, "Journeys count: {}", journeys.len())?;

    let Some(journey) = journeys.first() else {
        return Ok(());
    };

    writeln!(out, "\nFirst journey structure:")?;
    writeln!(out, "  - interchanges: {}", Shown(journey.at("interchanges")))?;
    writeln!(out, "  - isAdditional: {}", Shown(journey.at("isAdditional")))?;

    let legs = journey.items("legs");
    writeln!(out, "  - legs count: {}", legs.len())?;

    let tickets = journey.at("fare").items("tickets");
    writeln!(out, "  - fare.tickets count: {}", tickets.len())?;
    if let Some(ticket) = tickets.first() {
        writeln!(
            out,
            "    - first ticket: {} - person: {}",
            Shown(ticket.at("name")),
            Shown(ticket.at("person"))
        )?;
        writeln!(out, "    - priceBrutto: {}", Shown(ticket.at("priceBrutto")))?;
        writeln!(
            out,
            "    - properties keys: {:?}",
            ticket.key_names("properties", TICKET_PROPERTY_KEYS_SHOWN)
        )?;
    }

    if let Some(leg) = legs.first() {
        summarize_leg(leg, out)?;
    }

    Ok(())
}

fn summarize_leg(leg: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n  First leg structure:")?;
    writeln!(out, "    - duration: {} seconds", Shown(leg.at("duration")))?;
    writeln!(out, "    - distance: {} meters", Shown(leg.at("distance")))?;
    writeln!(
        out,
        "    - isRealtimeControlled: {}",
        Shown(leg.at("isRealtimeControlled"))
    )?;

    let origin = leg.at("origin");
    writeln!(out, "    - origin.name: {}", Shown(origin.at("name")))?;
    writeln!(
        out,
        "    - origin.departureTimePlanned: {}",
        Shown(origin.at("departureTimePlanned"))
    )?;
    writeln!(
        out,
        "    - origin.departureTimeEstimated: {}",
        Shown(origin.at("departureTimeEstimated"))
    )?;
    writeln!(
        out,
        "    - origin.properties keys: {:?}",
        origin.key_names("properties", usize::MAX)
    )?;

    writeln!(
        out,
        "    - destination.name: {}",
        Shown(leg.at("destination").at("name"))
    )?;

    let trans = leg.at("transportation");
    writeln!(out, "    - transportation.number: {}", Shown(trans.at("number")))?;
    writeln!(
        out,
        "    - transportation.product.class: {}",
        Shown(trans.at("product").at("class"))
    )?;

    writeln!(out, "    - stopSequence count: {}", leg.items("stopSequence").len())?;
    writeln!(out, "    - coords count: {}", leg.items("coords").len())?;

    let infos = leg.items("infos");
    writeln!(out, "    - infos (alerts) count: {}", infos.len())?;
    if let Some(info) = infos.first() {
        writeln!(out, "      - first alert: {}", alert_headline(info))?;
    }

    writeln!(out, "    - hints count: {}", leg.items("hints").len())?;
    writeln!(
        out,
        "    - properties keys: {:?}",
        leg.key_names("properties", usize::MAX)
    )?;

    Ok(())
}

/// Subtitle, falling back to the title.
fn alert_headline(info: &Value) -> String {
    let headline = match info.at("subtitle") {
        Value::Null => info.at("title"),
        subtitle => subtitle,
    };
    clipped(headline, "N/A", ALERT_CHARS_SHOWN)
}
