//! Export log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::ExportArtifact;
use crate::models::Money;
use crate::session::JobSession;

/// One export recorded in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the export happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Form session the export came from
    pub session_id: Uuid,

    pub project_number: String,

    pub job_name: String,

    /// Suggested file name of the artifact
    pub file_name: String,

    /// Export format extension, e.g. "xlsx"
    pub format: String,

    /// Where the artifact was written, if the caller saved it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    pub final_total: Money,
}

impl AuditEntry {
    /// Record an export of `session` that produced `artifact`
    pub fn export(
        session: &JobSession,
        artifact: &ExportArtifact,
        destination: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id: session.id(),
            project_number: session.registration().project_number.clone(),
            job_name: session.registration().job_name.clone(),
            file_name: artifact.file_name.clone(),
            format: artifact.format.extension().to_string(),
            destination,
            final_total: session.summary().final_total(),
        }
    }

    /// One-line description for terminal output
    pub fn format_summary(&self) -> String {
        let mut line = format!(
            "{} {} total={} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.file_name,
            self.final_total,
            self.job_name
        );
        if let Some(dest) = &self.destination {
            line.push_str(&format!(" -> {}", dest));
        }
        line
    }
}
