//! Job form wizard orchestration
//!
//! Walks the user through the three form sections, feeding every answer into
//! the session so the summary shown at the end reflects the latest inputs.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_registration, format_summary_table};
use crate::error::JobCostResult;
use crate::session::{FormEvent, JobSession};

use super::prompt::Prompter;
use super::steps::{BreakoutStep, PricingStep, RegistrationStep};

/// Result of running the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOutcome {
    /// Whether the user asked to download the summary
    pub export_requested: bool,
}

/// The job form wizard
pub struct JobFormWizard<'a> {
    settings: &'a Settings,
}

impl<'a> JobFormWizard<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Run the form against `session`, leaving the answers applied to it
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        session: &mut JobSession,
    ) -> JobCostResult<WizardOutcome> {
        prompter.say("===========================================")?;
        prompter.say("  Job Cost Summary")?;
        prompter.say("===========================================")?;
        prompter.say("Fill in the form step by step. Press Enter to keep a value.")?;

        let job_date = session.registration().job_date;
        let registration = RegistrationStep::run(prompter, session.registration(), job_date)?;
        session.apply(FormEvent::Registration(registration));

        let breakout = BreakoutStep::run(prompter, session.breakout())?;
        session.apply(FormEvent::Breakout(breakout));

        let pricing = PricingStep::run(prompter, session.pricing())?;
        session.apply(FormEvent::Pricing(pricing));

        prompter.say("")?;
        prompter.say("Summary Output")?;
        prompter.say("==============")?;
        prompter.say(format_registration(session.registration(), &self.settings.date_format).trim_end())?;
        prompter.say("")?;
        prompter.say(
            format_summary_table(session.summary(), &self.settings.currency_symbol).trim_end(),
        )?;
        prompter.say("")?;

        let export_requested = prompter.confirm("Download summary as Excel?", true)?;

        Ok(WizardOutcome { export_requested })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SummaryCategory;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn run_wizard(answers: &str) -> (JobSession, WizardOutcome, String) {
        let settings = Settings::default();
        let mut session = JobSession::blank(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            settings.default_margin_percent,
        );
        let mut prompter = Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());

        let outcome = JobFormWizard::new(&settings)
            .run(&mut prompter, &mut session)
            .unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (session, outcome, output)
    }

    #[test]
    fn test_full_form() {
        let answers = [
            "2025-06-02",       // job date
            "P-1042",           // project number
            "Riverside Clinic", // job name
            "Hale Builders",    // contractor
            "J. Ortiz",         // salesperson
            "100",              // hw deducts
            "50",               // hw adds
            "",                 // wd deducts
            "",                 // wd adds
            "75",               // labor adds
            "1000",             // hw base
            "500",              // wd base
            "",                 // margin (default 20)
            "yes",              // export
        ]
        .join("\n");

        let (session, outcome, output) = run_wizard(&answers);

        assert!(outcome.export_requested);
        assert_eq!(session.registration().project_number, "P-1042");
        assert_eq!(
            session.registration().job_date,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(session.summary().final_total().cents(), 181500);
        assert_eq!(
            session.summary().amount(SummaryCategory::WithMargin).cents(),
            174000
        );
        assert!(output.contains("Step 3: Pricing Setup"));
        assert!(output.contains("$1815.00"));
    }

    #[test]
    fn test_blank_form_declined() {
        let answers = "\n".repeat(13) + "no\n";
        let (session, outcome, _) = run_wizard(&answers);

        assert!(!outcome.export_requested);
        assert!(session.summary().iter().all(|l| l.amount.is_zero()));
        assert_eq!(session.pricing().margin_percent, 20.0);
    }

    #[test]
    fn test_bad_number_is_reprompted() {
        let answers = [
            "", "", "", "", "", // registration defaults
            "lots", "5", // hw deducts: invalid then valid
            "", "", "", "", // remaining breakout
            "10", "", "", // pricing
            "no",
        ]
        .join("\n");

        let (session, _, output) = run_wizard(&answers);

        assert!(output.contains("must be a number, got 'lots'"));
        assert_eq!(session.breakout().hw_deducts, 5.0);
        assert_eq!(session.summary().final_total().cents(), 600);
    }
}
