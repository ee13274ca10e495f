//! CLI commands for exporting a summary
//!
//! Encodes the summary and writes it under its generated file name.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use log::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::JobCostPaths, settings::Settings};
use crate::error::{JobCostError, JobCostResult};
use crate::export::{ExportArtifact, ExportFormat};
use crate::session::JobSession;

use super::job::JobArgs;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ExportFormatArg {
    /// Excel workbook (default)
    #[default]
    Xlsx,
    /// JSON summary with registration details
    Json,
    /// YAML summary, human-readable
    Yaml,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Xlsx => ExportFormat::Xlsx,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Arguments for `jobcost export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Directory to write the file into (defaults to the configured export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    pub format: ExportFormatArg,
}

/// Handle `jobcost export`
pub fn handle_export_command(
    paths: &JobCostPaths,
    settings: &Settings,
    args: ExportArgs,
) -> JobCostResult<()> {
    let session = args.job.into_session(settings)?;
    let artifact = session.export(args.format.into())?;

    let output_dir = args
        .output
        .unwrap_or_else(|| settings.resolve_output_dir(paths));
    let written = save_artifact(paths, settings, &session, &artifact, &output_dir)?;

    println!(
        "Exported {} ({}) to: {}",
        artifact.file_name,
        artifact.mime_type(),
        written.display()
    );

    Ok(())
}

/// File name to write on disk. Project numbers like `2024/17` would otherwise
/// turn into subdirectories, so path separators become `-`.
pub fn disk_file_name(file_name: &str) -> String {
    file_name.replace(|c: char| c == '/' || c == '\\', "-")
}

/// Write `artifact` into `output_dir` and record it in the export log.
///
/// A failure to write the log entry is reported but does not fail the export.
pub fn save_artifact(
    paths: &JobCostPaths,
    settings: &Settings,
    session: &JobSession,
    artifact: &ExportArtifact,
    output_dir: &Path,
) -> JobCostResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        JobCostError::Io(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let target = output_dir.join(disk_file_name(&artifact.file_name));
    fs::write(&target, &artifact.bytes).map_err(|e| {
        JobCostError::Io(format!("Failed to write {}: {}", target.display(), e))
    })?;
    info!("wrote {} bytes to {}", artifact.bytes.len(), target.display());

    if settings.audit_enabled {
        let logger = AuditLogger::new(paths.export_log());
        let entry = AuditEntry::export(session, artifact, Some(target.display().to_string()));
        if let Err(e) = logger.log(&entry) {
            warn!("export written but not logged: {}", e);
        }
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session() -> JobSession {
        let args = JobArgs {
            job_date: NaiveDate::from_ymd_opt(2025, 2, 14),
            project_number: "V-14".to_string(),
            hw_base_cost: 10.0,
            ..Default::default()
        };
        args.into_session(&Settings::default()).unwrap()
    }

    #[test]
    fn test_save_artifact_writes_and_logs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JobCostPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let session = session();
        let artifact = session.export(ExportFormat::Xlsx).unwrap();

        let out_dir = temp_dir.path().join("out");
        let target = save_artifact(&paths, &settings, &session, &artifact, &out_dir).unwrap();

        assert_eq!(target, out_dir.join("Cost_Summary_V-14.xlsx"));
        assert_eq!(fs::read(&target).unwrap(), artifact.bytes);

        let entries = AuditLogger::new(paths.export_log()).read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "Cost_Summary_V-14.xlsx");
        assert_eq!(entries[0].final_total.cents(), 1200);
    }

    #[test]
    fn test_disk_file_name_flattens_separators() {
        assert_eq!(disk_file_name("Cost_Summary_P-1.xlsx"), "Cost_Summary_P-1.xlsx");
        assert_eq!(disk_file_name("Cost_Summary_2024/17.xlsx"), "Cost_Summary_2024-17.xlsx");
        assert_eq!(
            disk_file_name("Cost_Summary_x/../../y.json"),
            "Cost_Summary_x-..-..-y.json"
        );
        assert_eq!(disk_file_name("Cost_Summary_a\\b.yaml"), "Cost_Summary_a-b.yaml");
    }

    #[test]
    fn test_save_artifact_stays_in_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JobCostPaths::with_base_dir(temp_dir.path().to_path_buf());
        let args = JobArgs {
            project_number: "x/../../y".to_string(),
            ..Default::default()
        };
        let session = args.into_session(&Settings::default()).unwrap();
        let artifact = session.export(ExportFormat::Json).unwrap();
        assert_eq!(artifact.file_name, "Cost_Summary_x/../../y.json");

        let out_dir = temp_dir.path().join("out");
        let target = save_artifact(&paths, &Settings::default(), &session, &artifact, &out_dir)
            .unwrap();

        assert_eq!(target.parent(), Some(out_dir.as_path()));
        assert!(out_dir.join("Cost_Summary_x-..-..-y.json").exists());
    }

    #[test]
    fn test_audit_disabled_skips_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JobCostPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.audit_enabled = false;
        let session = session();
        let artifact = session.export(ExportFormat::Yaml).unwrap();

        save_artifact(&paths, &settings, &session, &artifact, temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("Cost_Summary_V-14.yaml").exists());
        assert!(!paths.export_log().exists());
    }
}
