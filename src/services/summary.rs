//! Summary calculation
//!
//! Turns the breakout and pricing fields into the six-row summary record.

use log::debug;

use crate::models::{CostBreakout, Money, PricingSetup, SummaryCategory, SummaryRecord};

/// Unrounded intermediate totals, kept for callers that want the raw values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryTotals {
    pub hw_total: f64,
    pub wd_total: f64,
    pub material_total: f64,
    pub plus_margin_total: f64,
    pub labor_adds: f64,
    pub final_total: f64,
}

impl SummaryTotals {
    /// Round every total to cents, in record order
    pub fn to_record(&self) -> SummaryRecord {
        SummaryRecord::from_amounts([
            Money::from_amount(self.hw_total),
            Money::from_amount(self.wd_total),
            Money::from_amount(self.material_total),
            Money::from_amount(self.plus_margin_total),
            Money::from_amount(self.labor_adds),
            Money::from_amount(self.final_total),
        ])
    }
}

/// Stateless calculator for job cost summaries
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Compute the unrounded totals.
    ///
    /// Nothing is clamped: negative costs or deducts larger than the base
    /// cost produce negative totals.
    pub fn totals(
        breakout: &CostBreakout,
        pricing: &PricingSetup,
        labor_adds: f64,
    ) -> SummaryTotals {
        let hw_total = pricing.hw_base_cost - breakout.hw_deducts + breakout.hw_adds;
        let wd_total = pricing.wd_base_cost - breakout.wd_deducts + breakout.wd_adds;
        let material_total = hw_total + wd_total;
        let plus_margin_total = material_total * pricing.margin_multiplier();
        let final_total = plus_margin_total + labor_adds;

        SummaryTotals {
            hw_total,
            wd_total,
            material_total,
            plus_margin_total,
            labor_adds,
            final_total,
        }
    }

    /// Compute the rounded summary record.
    ///
    /// Each row is rounded independently from its unrounded total, so
    /// rounding never feeds into a later row.
    pub fn compute(
        breakout: &CostBreakout,
        pricing: &PricingSetup,
        labor_adds: f64,
    ) -> SummaryRecord {
        let totals = Self::totals(breakout, pricing, labor_adds);
        let record = totals.to_record();
        debug!(
            "computed summary: material={} margin={}% final={}",
            record.amount(SummaryCategory::MaterialSubtotal),
            pricing.margin_percent,
            record.final_total()
        );
        record
    }
}
