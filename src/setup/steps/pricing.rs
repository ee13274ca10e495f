//! Pricing step
//!
//! Collects the base material costs and the markup.

use std::io::{BufRead, Write};

use crate::error::JobCostResult;
use crate::models::PricingSetup;
use crate::setup::prompt::Prompter;

/// Pricing setup form step
pub struct PricingStep;

impl PricingStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        current: &PricingSetup,
    ) -> JobCostResult<PricingSetup> {
        prompter.say("")?;
        prompter.say("Step 3: Pricing Setup")?;
        prompter.say("=====================")?;

        Ok(PricingSetup {
            hw_base_cost: prompter.prompt_amount("Hardware Total Cost ($)", current.hw_base_cost)?,
            wd_base_cost: prompter.prompt_amount("Wood Total Cost ($)", current.wd_base_cost)?,
            margin_percent: prompter
                .prompt_margin("Markup Percentage (0-100)", current.margin_percent)?,
        })
    }
}
