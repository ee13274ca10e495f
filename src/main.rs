use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use jobcost::cli::{
    handle_export_command, handle_history_command, handle_summary_command, handle_wizard_command,
    ExportArgs, JobArgs,
};
use jobcost::config::{paths::JobCostPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "jobcost",
    version,
    about = "Job cost summary calculator with Excel export",
    long_about = "jobcost collects project registration, hardware and wood cost \
                  breakouts, and a markup percentage, then derives a cost summary \
                  you can export as an Excel workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the job form step by step
    #[command(alias = "form")]
    Wizard {
        /// Directory to save the Excel file into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute and print the cost summary
    Summary(JobArgs),

    /// Compute the cost summary and write it to a file
    Export(ExportArgs),

    /// Show recent exports
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = JobCostPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Wizard { output }) => {
            handle_wizard_command(&paths, &settings, output)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&paths, &settings, args)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&paths, count)?;
        }
        Some(Commands::Config) => {
            println!("jobcost Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export log:       {}", paths.export_log().display());
            println!(
                "Export directory: {}",
                settings.resolve_output_dir(&paths).display()
            );
            println!();
            println!("Settings:");
            println!("  Default markup:  {}%", settings.default_margin_percent);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Export logging:  {}", settings.audit_enabled);
        }
        None => {
            println!("jobcost - job cost summary calculator");
            println!();
            println!("Run 'jobcost --help' for usage information.");
            println!("Run 'jobcost wizard' to fill in the job form.");
        }
    }

    Ok(())
}
