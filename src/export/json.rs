//! JSON Export functionality
//!
//! Exports a job's registration details and summary as a versioned JSON
//! document.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{JobCostError, JobCostResult};
use crate::models::{RegistrationInfo, SummaryRecord};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Machine-readable summary export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    pub registration: RegistrationInfo,

    pub summary: SummaryRecord,
}

impl SummaryExport {
    pub fn new(record: &SummaryRecord, meta: &RegistrationInfo) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            registration: meta.clone(),
            summary: *record,
        }
    }
}

/// Write the summary export as JSON
pub fn export_summary_json<W: Write>(
    record: &SummaryRecord,
    meta: &RegistrationInfo,
    writer: &mut W,
    pretty: bool,
) -> JobCostResult<()> {
    let export = SummaryExport::new(record, meta);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| JobCostError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON summary export back
#[cfg(test)]
fn import_from_json(json_str: &str) -> JobCostResult<SummaryExport> {
    let export: SummaryExport = serde_json::from_str(json_str)?;
    Ok(export)
}
