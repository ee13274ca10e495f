//! Registration step
//!
//! Collects the job date and the free-text job details.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::JobCostResult;
use crate::models::RegistrationInfo;
use crate::setup::prompt::Prompter;

/// Registration form step
pub struct RegistrationStep;

impl RegistrationStep {
    /// Run the registration step; blank answers keep the values in `current`
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        current: &RegistrationInfo,
        default_date: NaiveDate,
    ) -> JobCostResult<RegistrationInfo> {
        prompter.say("")?;
        prompter.say("Step 1: Registration Form")?;
        prompter.say("=========================")?;

        let job_date = prompter.prompt_date("Job Date", default_date)?;
        let project_number = text_or(prompter, "Project Number", &current.project_number)?;
        let job_name = text_or(prompter, "Job Name", &current.job_name)?;
        let contractor = text_or(prompter, "Contractor", &current.contractor)?;
        let salesperson = text_or(prompter, "Salesperson", &current.salesperson)?;

        Ok(RegistrationInfo {
            job_date,
            project_number,
            job_name,
            contractor,
            salesperson,
        })
    }
}

fn text_or<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    label: &str,
    current: &str,
) -> JobCostResult<String> {
    let prompt = if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    };
    let answer = prompter.prompt_string(&prompt)?;
    Ok(if answer.is_empty() {
        current.to_string()
    } else {
        answer
    })
}
