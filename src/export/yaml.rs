//! YAML Export functionality
//!
//! Human-readable variant of the JSON summary export.

use std::io::Write;

use crate::error::{JobCostError, JobCostResult};
use crate::export::json::SummaryExport;
use crate::models::{RegistrationInfo, SummaryRecord};

/// Write the summary export as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(
    record: &SummaryRecord,
    meta: &RegistrationInfo,
    writer: &mut W,
) -> JobCostResult<()> {
    let export = SummaryExport::new(record, meta);

    writeln!(writer, "# Job Cost Summary")
        .map_err(|e| JobCostError::Export(e.to_string()))?;
    writeln!(writer, "# Project: {}", meta.project_number)
        .map_err(|e| JobCostError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| JobCostError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| JobCostError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| JobCostError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML summary export back
#[cfg(test)]
fn import_from_yaml(yaml_str: &str) -> JobCostResult<SummaryExport> {
    let export: SummaryExport = serde_yaml::from_str(yaml_str)?;
    Ok(export)
}
