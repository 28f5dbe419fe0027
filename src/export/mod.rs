//! Export module for tripsplit
//!
//! Writes a computed plan to disk:
//! - JSON: the whole plan, machine-readable
//! - YAML: the whole plan, human-readable
//! - CSV: the suggested transfers (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TripError, TripResult};
use crate::models::Plan;

pub use self::csv::export_settlements_csv;
pub use json::export_plan_json;
pub use yaml::export_plan_yaml;

/// File formats a plan can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> TripResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(TripError::Export(format!(
                "Unsupported export file type: {} (use .json, .yaml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Export `plan` to `path`, choosing the format from the extension
pub fn export_plan_to_file(plan: &Plan, path: &Path) -> TripResult<ExportFormat> {
    let format = ExportFormat::from_path(path)?;

    let file = File::create(path).map_err(|e| {
        TripError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_plan_json(plan, &mut writer, true)?,
        ExportFormat::Yaml => export_plan_yaml(plan, &mut writer)?,
        ExportFormat::Csv => export_settlements_csv(plan, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| TripError::Export(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(format)
}
