//! Guided job form
//!
//! Interactive, step-by-step entry of the job's registration, breakout, and
//! pricing fields.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::{parse_amount, Prompter};
pub use wizard::{JobFormWizard, WizardOutcome};
