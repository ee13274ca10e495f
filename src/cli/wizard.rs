//! CLI command for the interactive job form

use std::io;
use std::path::PathBuf;

use crate::config::{paths::JobCostPaths, settings::Settings};
use crate::error::JobCostResult;
use crate::export::ExportFormat;
use crate::session::JobSession;
use crate::setup::{JobFormWizard, Prompter};

use super::export::save_artifact;

/// Run the wizard on the terminal and export if the user asks for it
pub fn handle_wizard_command(
    paths: &JobCostPaths,
    settings: &Settings,
    output: Option<PathBuf>,
) -> JobCostResult<()> {
    let mut session = JobSession::blank(
        chrono::Local::now().date_naive(),
        settings.default_margin_percent,
    );

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let outcome = JobFormWizard::new(settings).run(&mut prompter, &mut session)?;

    if !outcome.export_requested {
        println!("Summary not exported.");
        return Ok(());
    }

    let artifact = session.export(ExportFormat::Xlsx)?;
    let output_dir = output.unwrap_or_else(|| settings.resolve_output_dir(paths));
    let written = save_artifact(paths, settings, &session, &artifact, &output_dir)?;
    println!("Excel file saved to: {}", written.display());

    Ok(())
}
