//! Path management for jobcost
//!
//! Provides XDG-compliant path resolution for settings, the export log, and
//! the default export directory.
//!
//! ## Path Resolution Order
//!
//! 1. `JOBCOST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/jobcost` or `~/.config/jobcost`
//! 3. Windows: `%APPDATA%\jobcost`

use std::path::PathBuf;

use crate::error::JobCostError;

/// Manages all paths used by jobcost
#[derive(Debug, Clone)]
pub struct JobCostPaths {
    base_dir: PathBuf,
}

impl JobCostPaths {
    /// Create a new JobCostPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, JobCostError> {
        let base_dir = if let Ok(custom) = std::env::var("JOBCOST_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create JobCostPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/jobcost/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the export log
    pub fn export_log(&self) -> PathBuf {
        self.base_dir.join("exports.log")
    }

    /// Directory exports land in when neither settings nor the command line name one
    pub fn default_output_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), JobCostError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| JobCostError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, JobCostError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| JobCostError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("jobcost"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, JobCostError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| JobCostError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("jobcost"))
}
