//! Form input models
//!
//! The three groups of fields collected by the job form: registration
//! details, the cost breakout, and the pricing setup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{JobCostError, JobCostResult};

/// Job registration details, carried verbatim onto every exported row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    pub job_date: NaiveDate,
    pub project_number: String,
    pub job_name: String,
    pub contractor: String,
    pub salesperson: String,
}

impl RegistrationInfo {
    /// Registration dated `job_date` with every text field empty
    pub fn new(job_date: NaiveDate) -> Self {
        Self {
            job_date,
            project_number: String::new(),
            job_name: String::new(),
            contractor: String::new(),
            salesperson: String::new(),
        }
    }
}

/// Deductions and additions applied to the base material costs
///
/// Every field is an independent amount. Negative values are allowed and
/// flow straight through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakout {
    pub hw_deducts: f64,
    pub hw_adds: f64,
    pub wd_deducts: f64,
    pub wd_adds: f64,
    pub labor_adds: f64,
}

/// Base material costs and the markup applied to them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSetup {
    pub hw_base_cost: f64,
    pub wd_base_cost: f64,
    /// Markup percentage, 0 to 100
    pub margin_percent: f64,
}

/// Markup applied when none is given
pub const DEFAULT_MARGIN_PERCENT: f64 = 20.0;

impl Default for PricingSetup {
    fn default() -> Self {
        Self {
            hw_base_cost: 0.0,
            wd_base_cost: 0.0,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl PricingSetup {
    /// Multiplier applied to the material subtotal
    pub fn margin_multiplier(&self) -> f64 {
        1.0 + self.margin_percent / 100.0
    }
}

/// Check a markup percentage entered by the user.
///
/// The calculator accepts any value; this is the input layer's range check.
pub fn validate_margin_percent(margin_percent: f64) -> JobCostResult<f64> {
    if (0.0..=100.0).contains(&margin_percent) {
        Ok(margin_percent)
    } else {
        Err(JobCostError::Validation(format!(
            "Markup percentage must be between 0 and 100, got {}",
            margin_percent
        )))
    }
}
