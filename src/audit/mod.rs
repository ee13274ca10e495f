//! Export log for jobcost
//!
//! Records every export in an append-only, line-delimited JSON file so a user
//! can see what was generated and where it went.
//!
//! - `AuditEntry`: one export, with timestamp, session id, file name and the
//!   final total at the time of export.
//! - `AuditLogger`: appends entries and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.export_log());
//! let artifact = session.export(ExportFormat::Xlsx)?;
//! logger.log(&AuditEntry::export(&session, &artifact, None))?;
//! ```

mod entry;
mod logger;

pub use entry::AuditEntry;
pub use logger::AuditLogger;
