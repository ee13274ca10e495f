//! Job field arguments shared by the `summary` and `export` commands

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::{JobCostError, JobCostResult};
use crate::models::{validate_margin_percent, CostBreakout, PricingSetup, RegistrationInfo};
use crate::session::JobSession;
use crate::setup::prompt::parse_amount;

/// Every form field as a command-line flag
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Job date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    pub job_date: Option<NaiveDate>,

    /// Project number
    #[arg(short = 'p', long, default_value = "")]
    pub project_number: String,

    /// Job name
    #[arg(short = 'j', long, default_value = "")]
    pub job_name: String,

    /// Contractor
    #[arg(long, default_value = "")]
    pub contractor: String,

    /// Salesperson
    #[arg(long, default_value = "")]
    pub salesperson: String,

    /// Hardware deducts ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub hw_deducts: f64,

    /// Hardware adds ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub hw_adds: f64,

    /// Wood deducts ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub wd_deducts: f64,

    /// Wood adds ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub wd_adds: f64,

    /// Labor adds ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub labor_adds: f64,

    /// Hardware total cost ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub hw_base_cost: f64,

    /// Wood total cost ($)
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub wd_base_cost: f64,

    /// Markup percentage (0-100), defaults to the configured markup
    #[arg(
        short = 'm',
        long,
        value_parser = parse_amount_flag,
        allow_negative_numbers = true
    )]
    pub margin_percent: Option<f64>,
}

impl JobArgs {
    /// Build a session from the flags, falling back to settings for the markup
    pub fn into_session(self, settings: &Settings) -> JobCostResult<JobSession> {
        let margin_percent =
            validate_margin_percent(self.margin_percent.unwrap_or(settings.default_margin_percent))?;

        let registration = RegistrationInfo {
            job_date: self
                .job_date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            project_number: self.project_number,
            job_name: self.job_name,
            contractor: self.contractor,
            salesperson: self.salesperson,
        };
        let breakout = CostBreakout {
            hw_deducts: self.hw_deducts,
            hw_adds: self.hw_adds,
            wd_deducts: self.wd_deducts,
            wd_adds: self.wd_adds,
            labor_adds: self.labor_adds,
        };
        let pricing = PricingSetup {
            hw_base_cost: self.hw_base_cost,
            wd_base_cost: self.wd_base_cost,
            margin_percent,
        };

        Ok(JobSession::new(registration, breakout, pricing))
    }
}

/// Amounts go through the same parser as the wizard, so `nan` and `inf` are
/// refused here too
fn parse_amount_flag(s: &str) -> Result<f64, JobCostError> {
    parse_amount("amount", s)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("expected a date like 2025-01-31, got '{}'", s))
}
