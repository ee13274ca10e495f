//! XLSX export
//!
//! Encodes a summary into a single-sheet workbook held entirely in memory.

use chrono::Datelike;
use log::info;
use rust_xlsxwriter::{ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use super::document::ExportDocument;
use super::{export_file_name, ExportArtifact, ExportFormat};
use crate::error::JobCostResult;
use crate::models::{RegistrationInfo, SummaryRecord};

/// Name of the only worksheet in the workbook
pub const SHEET_NAME: &str = "Summary";

const COLUMN_WIDTHS: [f64; 7] = [24.0, 12.0, 20.0, 16.0, 12.0, 18.0, 12.0];

/// Builds the downloadable spreadsheet for a summary
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
    /// Encode `record` with `meta` repeated on every row.
    ///
    /// Performs no I/O. The only failure is the encoder itself failing, in
    /// which case no bytes are returned.
    pub fn export(record: &SummaryRecord, meta: &RegistrationInfo) -> JobCostResult<ExportArtifact> {
        let document = ExportDocument::build(record, meta);
        let bytes = encode_workbook(&document)?;
        let file_name = export_file_name(&meta.project_number, ExportFormat::Xlsx);

        info!("encoded {} ({} bytes)", file_name, bytes.len());

        Ok(ExportArtifact {
            bytes,
            file_name,
            format: ExportFormat::Xlsx,
        })
    }
}

/// Write the header row and data rows of `document` into a new workbook
pub fn encode_workbook(document: &ExportDocument) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let fmt_header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let fmt_date = Format::new().set_num_format("yyyy-mm-dd");
    let fmt_amount = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in document.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &fmt_header)?;
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, row) in document.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        // Out-of-range years are rejected by from_ymd after the clamp
        let date = ExcelDateTime::from_ymd(
            row.date.year().clamp(0, i32::from(u16::MAX)) as u16,
            row.date.month() as u8,
            row.date.day() as u8,
        )?;

        worksheet.write_string(r, 0, &row.job)?;
        worksheet.write_string(r, 1, &row.project_number)?;
        worksheet.write_string(r, 2, &row.contractor)?;
        worksheet.write_string(r, 3, &row.salesperson)?;
        worksheet.write_datetime_with_format(r, 4, &date, &fmt_date)?;
        worksheet.write_string(r, 5, row.category.label())?;
        worksheet.write_number_with_format(r, 6, row.amount.to_f64(), &fmt_amount)?;
    }

    workbook.save_to_buffer()
}
