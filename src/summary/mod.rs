//! Per-category summaries of captured Trip Planner responses.
//!
//! Each summarizer writes a fixed sequence of labelled fields pulled from one
//! document with [`fields::Lookup`], so absent keys print placeholders rather
//! than failing.

pub mod add_info;
pub mod coord;
pub mod departure_monitor;
pub mod fields;
pub mod stop_finder;
pub mod trip;

use crate::catalog::Category;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// Writes the summary heading for `category` followed by its fields.
pub fn summarize(category: Category, document: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== {} ===", category.title())?;

    match category {
        Category::StopFinder => stop_finder::summarize(document, out),
        Category::DepartureMonitor => departure_monitor::summarize(document, out),
        Category::Trip => trip::summarize(document, out),
        Category::AddInfo => add_info::summarize(document, out),
        Category::Coord => coord::summarize(document, out),
    }
}

#[cfg(test)]
pub(crate) fn render(category: Category, document: &Value) -> String {
    let mut buf = Vec::new();
    summarize(category, document, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
