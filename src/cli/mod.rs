//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the summary and export layers.

pub mod export;
pub mod history;
pub mod job;
pub mod summary;
pub mod wizard;

pub use export::{handle_export_command, ExportArgs, ExportFormatArg};
pub use history::handle_history_command;
pub use job::JobArgs;
pub use summary::handle_summary_command;
pub use wizard::handle_wizard_command;
