//! Display formatting for terminal output

pub mod summary;

pub use summary::{format_registration, format_summary_table};
