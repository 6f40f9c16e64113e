//! Runtime configuration read from the environment (and `.env` via `dotenvy`).

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::structure::DEFAULT_MAX_DEPTH;

pub const RESPONSES_DIR_VAR: &str = "TRIP_PLANNER_RESPONSES_DIR";
pub const MAX_DEPTH_VAR: &str = "TRIP_PLANNER_MAX_DEPTH";
pub const PRINT_STRUCTURE_VAR: &str = "TRIP_PLANNER_PRINT_STRUCTURE";
pub const STRUCTURE_CSV_VAR: &str = "TRIP_PLANNER_STRUCTURE_CSV";

/// Response captures shipped alongside the crate sources.
const DEFAULT_RESPONSES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/responses");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Directory holding the captured response files.
    pub responses_dir: PathBuf,
    /// Depth limit for the generic structure dump.
    pub max_depth: usize,
    /// Print the generic structure dump after each summary.
    pub print_structure: bool,
    /// Append structure records to this CSV file.
    pub structure_csv: Option<PathBuf>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            responses_dir: PathBuf::from(DEFAULT_RESPONSES_DIR),
            max_depth: DEFAULT_MAX_DEPTH,
            print_structure: false,
            structure_csv: None,
        }
    }
}

impl InspectorConfig {
    /// Builds the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = var(RESPONSES_DIR_VAR) {
            config.responses_dir = PathBuf::from(dir);
        }

        if let Some(depth) = var(MAX_DEPTH_VAR) {
            config.max_depth = depth.trim().parse::<usize>().with_context(|| {
                format!("{MAX_DEPTH_VAR} must be a non-negative integer, got '{depth}'")
            })?;
        }

        if let Some(flag) = var(PRINT_STRUCTURE_VAR) {
            config.print_structure = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config.structure_csv = var(STRUCTURE_CSV_VAR).map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = InspectorConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, InspectorConfig::default());
        assert_eq!(config.max_depth, 4);
        assert!(config.responses_dir.ends_with("responses"));
        assert!(!config.print_structure);
        assert!(config.structure_csv.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = InspectorConfig::from_lookup(lookup_from(&[
            (RESPONSES_DIR_VAR, "/tmp/captures"),
            (MAX_DEPTH_VAR, " 2 "),
            (PRINT_STRUCTURE_VAR, "TRUE"),
            (STRUCTURE_CSV_VAR, "structure.csv"),
        ]))
        .unwrap();

        assert_eq!(config.responses_dir, PathBuf::from("/tmp/captures"));
        assert_eq!(config.max_depth, 2);
        assert!(config.print_structure);
        assert_eq!(config.structure_csv, Some(PathBuf::from("structure.csv")));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = InspectorConfig::from_lookup(lookup_from(&[
            (STRUCTURE_CSV_VAR, "  "),
            (PRINT_STRUCTURE_VAR, ""),
        ]))
        .unwrap();
        assert!(config.structure_csv.is_none());
        assert!(!config.print_structure);
    }

    #[test]
    fn test_invalid_depth_is_an_error() {
        let err =
            InspectorConfig::from_lookup(lookup_from(&[(MAX_DEPTH_VAR, "deep")])).unwrap_err();
        assert!(err.to_string().contains(MAX_DEPTH_VAR));
    }
}
