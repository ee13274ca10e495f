//! Summary record model
//!
//! The six rounded line items derived from a job's inputs. Position in the
//! record is meaningful: consumers index rows by [`SummaryCategory`] order,
//! and the category label is kept alongside for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Line items of a summary, in record order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryCategory {
    #[serde(rename = "HW Cost")]
    HwCost,
    #[serde(rename = "WD Cost")]
    WdCost,
    #[serde(rename = "Material Subtotal")]
    MaterialSubtotal,
    #[serde(rename = "With Margin")]
    WithMargin,
    #[serde(rename = "Labor Adds")]
    LaborAdds,
    #[serde(rename = "Final Total")]
    FinalTotal,
}

impl SummaryCategory {
    /// All categories in record order
    pub const ALL: [SummaryCategory; 6] = [
        SummaryCategory::HwCost,
        SummaryCategory::WdCost,
        SummaryCategory::MaterialSubtotal,
        SummaryCategory::WithMargin,
        SummaryCategory::LaborAdds,
        SummaryCategory::FinalTotal,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SummaryCategory::HwCost => "HW Cost",
            SummaryCategory::WdCost => "WD Cost",
            SummaryCategory::MaterialSubtotal => "Material Subtotal",
            SummaryCategory::WithMargin => "With Margin",
            SummaryCategory::LaborAdds => "Labor Adds",
            SummaryCategory::FinalTotal => "Final Total",
        }
    }

    /// Zero-based position within a summary record
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SummaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a summary record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub category: SummaryCategory,
    pub amount: Money,
}

/// Exactly six rounded line items in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryRecord {
    lines: [SummaryLine; 6],
}

impl SummaryRecord {
    /// Build a record from the six amounts, given in record order
    pub fn from_amounts(amounts: [Money; 6]) -> Self {
        let mut lines = [SummaryLine {
            category: SummaryCategory::HwCost,
            amount: Money::zero(),
        }; 6];
        for (line, (category, amount)) in lines
            .iter_mut()
            .zip(SummaryCategory::ALL.into_iter().zip(amounts))
        {
            *line = SummaryLine { category, amount };
        }
        Self { lines }
    }

    /// Rows in record order
    pub fn lines(&self) -> &[SummaryLine; 6] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &SummaryLine> {
        self.lines.iter()
    }

    /// Amount for a category
    pub fn amount(&self, category: SummaryCategory) -> Money {
        self.lines[category.position()].amount
    }

    pub fn final_total(&self) -> Money {
        self.amount(SummaryCategory::FinalTotal)
    }
}

impl<'a> IntoIterator for &'a SummaryRecord {
    type Item = &'a SummaryLine;
    type IntoIter = std::slice::Iter<'a, SummaryLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryRecord {
        SummaryRecord::from_amounts([
            Money::from_cents(95000),
            Money::from_cents(50000),
            Money::from_cents(145000),
            Money::from_cents(174000),
            Money::from_cents(7500),
            Money::from_cents(181500),
        ])
    }

    #[test]
    fn test_positions_follow_record_order() {
        for (i, category) in SummaryCategory::ALL.iter().enumerate() {
            assert_eq!(category.position(), i);
        }
    }

    #[test]
    fn test_from_amounts_keeps_order() {
        let record = sample();
        let labels: Vec<&str> = record.iter().map(|l| l.category.label()).collect();
        assert_eq!(
            labels,
            vec![
                "HW Cost",
                "WD Cost",
                "Material Subtotal",
                "With Margin",
                "Labor Adds",
                "Final Total"
            ]
        );
        assert_eq!(record.amount(SummaryCategory::WdCost).cents(), 50000);
        assert_eq!(record.final_total().cents(), 181500);
    }

    #[test]
    fn test_serializes_as_labelled_rows() {
        let json = serde_json::to_value(sample()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["category"], "HW Cost");
        assert_eq!(rows[5]["category"], "Final Total");
        assert_eq!(rows[5]["amount"], 1815.0);
    }
}
