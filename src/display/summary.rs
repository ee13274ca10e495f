//! Summary display formatting
//!
//! Formats the summary record and job details for terminal output.

use std::fmt::Write;

use crate::models::{RegistrationInfo, SummaryCategory, SummaryRecord};

/// Format the summary as a two-column Category / Amount table
pub fn format_summary_table(record: &SummaryRecord, currency_symbol: &str) -> String {
    let category_width = SummaryCategory::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(8)
        .max("Category".len());

    let amounts: Vec<String> = record
        .iter()
        .map(|line| line.amount.format_with_symbol(currency_symbol))
        .collect();
    let amount_header = format!("Amount ({})", currency_symbol);
    let amount_width = amounts
        .iter()
        .map(|a| a.chars().count())
        .max()
        .unwrap_or(0)
        .max(amount_header.chars().count());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<category_width$}  {:>amount_width$}\n",
        "Category",
        amount_header,
        category_width = category_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "{:-<category_width$}  {:->amount_width$}\n",
        "",
        "",
        category_width = category_width,
        amount_width = amount_width,
    ));

    for (line, amount) in record.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<category_width$}  {:>amount_width$}\n",
            line.category.label(),
            amount,
            category_width = category_width,
            amount_width = amount_width,
        ));
    }

    output
}

/// Format job registration details
///
/// An unusable `date_format` falls back to ISO `YYYY-MM-DD`.
pub fn format_registration(meta: &RegistrationInfo, date_format: &str) -> String {
    let mut date = String::new();
    if write!(date, "{}", meta.job_date.format(date_format)).is_err() {
        date = meta.job_date.to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Job:         {}\n", meta.job_name));
    output.push_str(&format!("Project #:   {}\n", meta.project_number));
    output.push_str(&format!("Contractor:  {}\n", meta.contractor));
    output.push_str(&format!("Salesperson: {}\n", meta.salesperson));
    output.push_str(&format!("Date:        {}\n", date));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_table_layout() {
        let record = SummaryRecord::from_amounts([
            Money::from_cents(95000),
            Money::from_cents(50000),
            Money::from_cents(145000),
            Money::from_cents(174000),
            Money::from_cents(7500),
            Money::from_cents(181500),
        ]);
        let table = format_summary_table(&record, "$");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Category"));
        assert!(lines[0].ends_with("Amount ($)"));
        assert!(lines[2].starts_with("HW Cost"));
        assert!(lines[2].ends_with("$950.00"));
        assert!(lines[7].starts_with("Final Total"));
        assert!(lines[7].ends_with("$1815.00"));
        // amounts are right-aligned
        assert_eq!(lines[2].len(), lines[7].len());
    }

    #[test]
    fn test_negative_amounts() {
        let mut amounts = [Money::zero(); 6];
        amounts[0] = Money::from_cents(-40000);
        let table = format_summary_table(&SummaryRecord::from_amounts(amounts), "$");
        assert!(table.contains("-$400.00"));
    }

    #[test]
    fn test_format_registration() {
        let mut meta = RegistrationInfo::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        meta.job_name = "Library Annex".to_string();
        let text = format_registration(&meta, "%m/%d/%Y");
        assert!(text.contains("Job:         Library Annex"));
        assert!(text.contains("07/04/2025"));
    }

    #[test]
    fn test_format_registration_bad_date_format() {
        let meta = RegistrationInfo::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        let text = format_registration(&meta, "%Q");
        assert!(text.contains("Date:        2025-07-04"));
    }
}
