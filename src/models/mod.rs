//! Core data models for jobcost
//!
//! - `job`: the form inputs (registration, breakout, pricing)
//! - `money`: rounded currency amounts
//! - `summary`: the six-row summary record

pub mod job;
pub mod money;
pub mod summary;

pub use job::{
    validate_margin_percent, CostBreakout, PricingSetup, RegistrationInfo,
    DEFAULT_MARGIN_PERCENT,
};
pub use money::Money;
pub use summary::{SummaryCategory, SummaryLine, SummaryRecord};
