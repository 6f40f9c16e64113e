//! Persistence and logging of structure dumps.
//!
//! Supports debug logging and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::structure::StructureMap;

/// One path of a structure dump, as a CSV row.
#[derive(Debug, Serialize)]
pub struct StructureRecord {
    pub timestamp: DateTime<Utc>,
    pub file: String,
    pub path: String,
    pub summary: String,
}

impl StructureRecord {
    /// Flattens a structure map into rows sharing one timestamp.
    pub fn from_structure(file: &str, structure: &StructureMap) -> Vec<Self> {
        let timestamp = Utc::now();
        structure
            .iter()
            .map(|(path, summary)| StructureRecord {
                timestamp,
                file: file.to_string(),
                path: path.clone(),
                summary: summary.clone(),
            })
            .collect()
    }
}

/// Logs every path of a structure map at debug level.
pub fn log_structure(file: &str, structure: &StructureMap) {
    for (path, summary) in structure {
        debug!(file, path = %path, summary = %summary, "Structure entry");
    }
}

/// Writes a structure map as indented `path: summary` lines.
pub fn print_structure(structure: &StructureMap, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n--- STRUCTURE ---")?;
    for (path, summary) in structure {
        writeln!(out, "  {path}: {summary}")?;
    }
    Ok(())
}

/// Appends [`StructureRecord`] rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &Path, records: &[StructureRecord]) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, rows = records.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::analyze_structure;
    use serde_json::json;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn sample_structure() -> StructureMap {
        analyze_structure(&json!({
            "version": "10.2.1.42",
            "locations": [{"name": "Epping Station"}]
        }))
    }

    #[test]
    fn test_log_structure_does_not_panic() {
        log_structure("example.json", &sample_structure());
    }

    #[test]
    fn test_print_structure() {
        let mut buf = Vec::new();
        print_structure(&sample_structure(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("\n--- STRUCTURE ---\n"));
        assert!(text.contains("  locations: array (1 items)\n"));
        assert!(text.contains("  locations[0].name: string: \"Epping Station\"\n"));
    }

    #[test]
    fn test_from_structure_keeps_order() {
        let records = StructureRecord::from_structure("f.json", &sample_structure());
        let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();

        assert_eq!(paths, vec!["version", "locations", "locations[0].name"]);
        assert!(records.iter().all(|r| r.file == "f.json"));
    }

    #[test]
    fn test_append_records_creates_file() {
        let path = temp_path("trip_planner_inspector_test_create.csv");
        let _ = fs::remove_file(&path);

        let records = StructureRecord::from_structure("f.json", &sample_structure());
        append_records(&path, &records).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("locations[0].name"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_records_writes_header_once() {
        let path = temp_path("trip_planner_inspector_test_header.csv");
        let _ = fs::remove_file(&path);

        let records = StructureRecord::from_structure("f.json", &sample_structure());
        append_records(&path, &records).unwrap();
        append_records(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("timestamp,")).count();
        assert_eq!(header_count, 1);
        // 1 header + 2 x 3 rows
        assert_eq!(content.lines().count(), 7);

        fs::remove_file(&path).unwrap();
    }
}
