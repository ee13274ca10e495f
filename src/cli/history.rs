//! CLI command for reviewing past exports

use crate::audit::AuditLogger;
use crate::config::paths::JobCostPaths;
use crate::error::JobCostResult;

/// Print the most recent `count` export log entries
pub fn handle_history_command(paths: &JobCostPaths, count: usize) -> JobCostResult<()> {
    let logger = AuditLogger::new(paths.export_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No exports recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_summary());
    }

    Ok(())
}
