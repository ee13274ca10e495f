//! Line-oriented prompts used by the form wizard
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! wizard runs the same against a terminal or a test buffer.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{JobCostError, JobCostResult};
use crate::models::validate_margin_percent;

/// Parse a currency amount as typed by a user: `1200`, `-50.25`, `$1,200.50`
pub fn parse_amount(field: &str, raw: &str) -> JobCostResult<f64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let (dollar, rest) = match rest.strip_prefix('$') {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

    // A sign may only lead the whole value.
    if (negative || dollar) && cleaned.starts_with(|c: char| c == '-' || c == '+') {
        return Err(JobCostError::not_a_number(field, raw));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| JobCostError::not_a_number(field, raw))?;
    if !value.is_finite() {
        return Err(JobCostError::not_a_number(field, raw));
    }

    Ok(if negative { -value } else { value })
}

/// Interactive prompt over a reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> JobCostResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt for a string input. End of input reads as an empty answer.
    pub fn prompt_string(&mut self, prompt: &str) -> JobCostResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        self.input.read_line(&mut input)?;

        Ok(input.trim().to_string())
    }

    /// Prompt for an amount; blank keeps `default`, bad input asks again
    pub fn prompt_amount(&mut self, label: &str, default: f64) -> JobCostResult<f64> {
        loop {
            let answer = self.prompt_string(&format!("{} [{:.2}]: ", label, default))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match parse_amount(label, &answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Prompt for the markup percentage, keeping it within 0 to 100
    pub fn prompt_margin(&mut self, label: &str, default: f64) -> JobCostResult<f64> {
        loop {
            let value = self.prompt_amount(label, default)?;
            match validate_margin_percent(value) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Prompt for a `YYYY-MM-DD` date; blank keeps `default`
    pub fn prompt_date(&mut self, label: &str, default: NaiveDate) -> JobCostResult<NaiveDate> {
        loop {
            let answer = self.prompt_string(&format!("{} [{}]: ", label, default))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => self.say(&format!(
                    "Validation error: {} must be a date like 2025-01-31, got '{}'",
                    label, answer
                ))?,
            }
        }
    }

    /// Yes/no question; blank answers `default_yes`
    pub fn confirm(&mut self, prompt: &str, default_yes: bool) -> JobCostResult<bool> {
        let hint = if default_yes { "yes" } else { "no" };
        let answer = self.prompt_string(&format!("{} (yes/no) [{}]: ", prompt, hint))?;
        Ok(match answer.to_lowercase().as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Consume the prompter, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
