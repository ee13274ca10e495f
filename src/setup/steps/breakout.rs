//! Breakout step
//!
//! Collects the deductions and additions applied to the base costs.

use std::io::{BufRead, Write};

use crate::error::JobCostResult;
use crate::models::CostBreakout;
use crate::setup::prompt::Prompter;

/// Breakout summary form step
pub struct BreakoutStep;

impl BreakoutStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        current: &CostBreakout,
    ) -> JobCostResult<CostBreakout> {
        prompter.say("")?;
        prompter.say("Step 2: Breakout Summary")?;
        prompter.say("========================")?;
        prompter.say("Negative amounts are allowed.")?;

        Ok(CostBreakout {
            hw_deducts: prompter.prompt_amount("Hardware Deducts ($)", current.hw_deducts)?,
            hw_adds: prompter.prompt_amount("Hardware Adds ($)", current.hw_adds)?,
            wd_deducts: prompter.prompt_amount("Wood Deducts ($)", current.wd_deducts)?,
            wd_adds: prompter.prompt_amount("Wood Adds ($)", current.wd_adds)?,
            labor_adds: prompter.prompt_amount("Labor Adds ($)", current.labor_adds)?,
        })
    }
}
