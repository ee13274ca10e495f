//! Export row-set
//!
//! Flattens a summary record and the job's registration details into the
//! rows written to the spreadsheet: the five registration columns repeated
//! on every row, then the category and its amount.

use chrono::NaiveDate;

use crate::models::{Money, RegistrationInfo, SummaryCategory, SummaryRecord};

/// Column headers, in sheet order
pub const EXPORT_HEADERS: [&str; 7] = [
    "Job",
    "Project #",
    "Contractor",
    "Salesperson",
    "Date",
    "Category",
    "Amount ($)",
];

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub job: String,
    pub project_number: String,
    pub contractor: String,
    pub salesperson: String,
    pub date: NaiveDate,
    pub category: SummaryCategory,
    pub amount: Money,
}

/// The full row-set for one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    rows: Vec<ExportRow>,
}

impl ExportDocument {
    /// One row per summary line, in record order
    pub fn build(record: &SummaryRecord, meta: &RegistrationInfo) -> Self {
        let rows = record
            .iter()
            .map(|line| ExportRow {
                job: meta.job_name.clone(),
                project_number: meta.project_number.clone(),
                contractor: meta.contractor.clone(),
                salesperson: meta.salesperson.clone(),
                date: meta.job_date,
                category: line.category,
                amount: line.amount,
            })
            .collect();

        Self { rows }
    }

    pub fn headers(&self) -> &'static [&'static str; 7] {
        &EXPORT_HEADERS
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }
}
