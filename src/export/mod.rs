//! Export module for jobcost
//!
//! Turns a computed summary into a downloadable artifact:
//! - XLSX: the single-sheet spreadsheet handed to the user
//! - JSON: machine-readable summary with registration details
//! - YAML: human-readable variant of the JSON export
//!
//! Exporters only encode. Writing the bytes somewhere is the caller's job.

pub mod document;
pub mod json;
pub mod xlsx;
pub mod yaml;

use crate::error::JobCostResult;
use crate::models::{RegistrationInfo, SummaryRecord};

pub use document::{ExportDocument, ExportRow, EXPORT_HEADERS};
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use xlsx::{SpreadsheetExporter, SHEET_NAME};
pub use yaml::export_summary_yaml;

/// Prefix of every generated export file name
pub const FILE_NAME_PREFIX: &str = "Cost_Summary_";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Json => "application/json",
            ExportFormat::Yaml => "application/yaml",
        }
    }
}

/// Encoded export plus the name it should be delivered under
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub format: ExportFormat,
}

impl ExportArtifact {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// `Cost_Summary_<project_number>.<ext>`; the project number is used as-is,
/// so an empty one still yields a well-formed name.
pub fn export_file_name(project_number: &str, format: ExportFormat) -> String {
    format!("{}{}.{}", FILE_NAME_PREFIX, project_number, format.extension())
}

/// Encode a summary in the requested format
pub fn export_summary(
    record: &SummaryRecord,
    meta: &RegistrationInfo,
    format: ExportFormat,
) -> JobCostResult<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Xlsx => return SpreadsheetExporter::export(record, meta),
        ExportFormat::Json => {
            let mut buf = Vec::new();
            export_summary_json(record, meta, &mut buf, true)?;
            buf
        }
        ExportFormat::Yaml => {
            let mut buf = Vec::new();
            export_summary_yaml(record, meta, &mut buf)?;
            buf
        }
    };

    Ok(ExportArtifact {
        bytes,
        file_name: export_file_name(&meta.project_number, format),
        format,
    })
}
