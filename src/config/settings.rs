//! User settings for jobcost
//!
//! Manages preferences such as the default markup, currency display, and
//! where exports are written.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::JobCostPaths;
use crate::error::JobCostError;

/// User settings for jobcost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Markup percentage offered when the form starts
    #[serde(default = "default_margin_percent")]
    pub default_margin_percent: f64,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Directory exports are written to; falls back to the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Whether exports are recorded in the export log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_margin_percent() -> f64 {
    20.0
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_margin_percent: default_margin_percent(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            output_dir: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &JobCostPaths) -> Result<Self, JobCostError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                JobCostError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                JobCostError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !(0.0..=100.0).contains(&settings.default_margin_percent) {
                return Err(JobCostError::Config(format!(
                    "default_margin_percent must be between 0 and 100, got {}",
                    settings.default_margin_percent
                )));
            }

            validate_date_format(&settings.date_format)?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &JobCostPaths) -> Result<(), JobCostError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            JobCostError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            JobCostError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the directory exports should be written to
    pub fn resolve_output_dir(&self, paths: &JobCostPaths) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| paths.default_output_dir())
    }
}

/// Check that `format` is a strftime pattern chrono can render
pub fn validate_date_format(format: &str) -> Result<(), JobCostError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(JobCostError::Config(format!(
            "date_format '{}' is not a valid strftime pattern",
            format
        )));
    }
    Ok(())
}
