//! CLI command for showing a summary

use crate::config::settings::Settings;
use crate::display::{format_registration, format_summary_table};
use crate::error::JobCostResult;

use super::job::JobArgs;

/// Compute and print the summary for the given fields
pub fn handle_summary_command(settings: &Settings, args: JobArgs) -> JobCostResult<()> {
    let session = args.into_session(settings)?;

    print!("{}", format_registration(session.registration(), &settings.date_format));
    println!();
    print!(
        "{}",
        format_summary_table(session.summary(), &settings.currency_symbol)
    );

    Ok(())
}
