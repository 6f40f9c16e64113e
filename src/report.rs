//! Drives the inspection over every captured response file.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::{debug, info, warn};

use crate::catalog::{Category, RESPONSE_FILES, ResponseFile};
use crate::config::InspectorConfig;
use crate::output::{StructureRecord, append_records, log_structure, print_structure};
use crate::parser::parse_document;
use crate::structure::analyze_structure_with_depth;
use crate::summary::summarize;

const BANNER_WIDTH: usize = 60;

/// Counts from one pass over the response files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub inspected: usize,
    pub missing: usize,
}

/// Inspects every entry of [`RESPONSE_FILES`], writing the report to `out`.
///
/// # Errors
///
/// Missing files are reported and skipped. Any other read or parse failure
/// aborts the run.
#[tracing::instrument(skip(out), fields(responses_dir = %config.responses_dir.display()))]
pub fn run(config: &InspectorConfig, out: &mut dyn Write) -> Result<RunSummary> {
    run_files(config, RESPONSE_FILES, out)
}

/// Same as [`run`] over an explicit file list.
pub fn run_files(
    config: &InspectorConfig,
    files: &[ResponseFile],
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for entry in files {
        if inspect_file(config, entry, out)? {
            summary.inspected += 1;
        } else {
            summary.missing += 1;
        }
    }

    info!(
        inspected = summary.inspected,
        missing = summary.missing,
        "Inspection finished"
    );
    Ok(summary)
}

/// Reports on one response file. Returns `false` if the file does not exist.
#[tracing::instrument(skip(config, out), fields(name = entry.name, file = entry.filename))]
fn inspect_file(
    config: &InspectorConfig,
    entry: &ResponseFile,
    out: &mut dyn Write,
) -> Result<bool> {
    let path = config.responses_dir.join(entry.filename);
    if !path.exists() {
        warn!(path = %path.display(), "Response file missing, skipping");
        writeln!(out, "File not found: {}", entry.filename)?;
        return Ok(false);
    }

    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{banner}")?;
    writeln!(out, "ANALYZING: {}", entry.filename)?;
    writeln!(out, "{banner}")?;

    let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let document =
        parse_document(&bytes).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(bytes = bytes.len(), "Response parsed");

    writeln!(out, "File size: {:.1} KB", bytes.len() as f64 / 1024.0)?;

    if let Some(category) = Category::from_name(entry.name) {
        summarize(category, &document, out)?;
    } else {
        warn!("No summarizer matches this response name");
    }

    let structure = analyze_structure_with_depth(&document, config.max_depth);
    log_structure(entry.filename, &structure);

    if config.print_structure {
        print_structure(&structure, out)?;
    }

    if let Some(csv_path) = &config.structure_csv {
        let records = StructureRecord::from_structure(entry.filename, &structure);
        append_records(csv_path, &records)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
    }

    Ok(true)
}
