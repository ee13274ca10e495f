//! Form session state
//!
//! A `JobSession` holds one user's form inputs and the summary derived from
//! them. Every input change goes through [`JobSession::apply`], which
//! re-runs the calculator, so the summary is never stale. Sessions are plain
//! values owned by whoever drives the form; nothing here is global.

use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::error::JobCostResult;
use crate::export::{export_summary, ExportArtifact, ExportFormat};
use crate::models::{CostBreakout, PricingSetup, RegistrationInfo, SummaryRecord};
use crate::services::SummaryCalculator;

/// Free-text registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ProjectNumber,
    JobName,
    Contractor,
    Salesperson,
}

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    HwDeducts,
    HwAdds,
    WdDeducts,
    WdAdds,
    LaborAdds,
    HwBaseCost,
    WdBaseCost,
    MarginPercent,
}

/// A change made on the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    JobDate(NaiveDate),
    Text(TextField, String),
    Amount(AmountField, f64),
    Registration(RegistrationInfo),
    Breakout(CostBreakout),
    Pricing(PricingSetup),
}

/// Inputs and derived summary for one form session
#[derive(Debug, Clone)]
pub struct JobSession {
    id: Uuid,
    registration: RegistrationInfo,
    breakout: CostBreakout,
    pricing: PricingSetup,
    summary: SummaryRecord,
}

impl JobSession {
    /// Start a session with the given inputs
    pub fn new(registration: RegistrationInfo, breakout: CostBreakout, pricing: PricingSetup) -> Self {
        let summary = SummaryCalculator::compute(&breakout, &pricing, breakout.labor_adds);
        Self {
            id: Uuid::new_v4(),
            registration,
            breakout,
            pricing,
            summary,
        }
    }

    /// Blank form dated `job_date` with the given default markup
    pub fn blank(job_date: NaiveDate, default_margin_percent: f64) -> Self {
        Self::new(
            RegistrationInfo::new(job_date),
            CostBreakout::default(),
            PricingSetup {
                margin_percent: default_margin_percent,
                ..PricingSetup::default()
            },
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn registration(&self) -> &RegistrationInfo {
        &self.registration
    }

    pub fn breakout(&self) -> &CostBreakout {
        &self.breakout
    }

    pub fn pricing(&self) -> &PricingSetup {
        &self.pricing
    }

    /// Summary for the current inputs
    pub fn summary(&self) -> &SummaryRecord {
        &self.summary
    }

    /// Apply a form change and recompute the summary
    pub fn apply(&mut self, event: FormEvent) -> &SummaryRecord {
        debug!("session {}: {:?}", self.id, event);

        match event {
            FormEvent::JobDate(date) => self.registration.job_date = date,
            FormEvent::Text(field, value) => {
                let slot = match field {
                    TextField::ProjectNumber => &mut self.registration.project_number,
                    TextField::JobName => &mut self.registration.job_name,
                    TextField::Contractor => &mut self.registration.contractor,
                    TextField::Salesperson => &mut self.registration.salesperson,
                };
                *slot = value;
            }
            FormEvent::Amount(field, value) => {
                let slot = match field {
                    AmountField::HwDeducts => &mut self.breakout.hw_deducts,
                    AmountField::HwAdds => &mut self.breakout.hw_adds,
                    AmountField::WdDeducts => &mut self.breakout.wd_deducts,
                    AmountField::WdAdds => &mut self.breakout.wd_adds,
                    AmountField::LaborAdds => &mut self.breakout.labor_adds,
                    AmountField::HwBaseCost => &mut self.pricing.hw_base_cost,
                    AmountField::WdBaseCost => &mut self.pricing.wd_base_cost,
                    AmountField::MarginPercent => &mut self.pricing.margin_percent,
                };
                *slot = value;
            }
            FormEvent::Registration(registration) => self.registration = registration,
            FormEvent::Breakout(breakout) => self.breakout = breakout,
            FormEvent::Pricing(pricing) => self.pricing = pricing,
        }

        self.recompute();
        &self.summary
    }

    /// Encode the current summary for download
    pub fn export(&self, format: ExportFormat) -> JobCostResult<ExportArtifact> {
        export_summary(&self.summary, &self.registration, format)
    }

    fn recompute(&mut self) {
        self.summary =
            SummaryCalculator::compute(&self.breakout, &self.pricing, self.breakout.labor_adds);
    }
}
