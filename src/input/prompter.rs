use log::{debug, info};
use std::io::{BufRead, Write};

use crate::config::RetryPolicy;
use crate::decimal::Rate;
use crate::errors::{DepositError, Result};
use crate::input::parse::{menu_for, parse_choice, parse_principal, parse_whole_number};
use crate::types::{InterestPaid, InvestmentTerm, Principal};

pub const PRINCIPAL_PROMPT: &str = "Enter the start deposit amount (between 1,000 and 1,500,000): ";
pub const RATE_PROMPT: &str = "Enter the interest rate in percentage: ";
pub const YEARS_PROMPT: &str = "Investment term in years: ";
pub const MONTHS_PROMPT: &str = "Investment term in months: ";
pub const MENU_HEADER: &str = "Choose the interest paid frequency:";
pub const CHOICE_PROMPT: &str = "Enter the number corresponding to your choice: ";

/// reads validated deposit fields from a line source, re-prompting on bad input
///
/// every rejected attempt writes exactly one diagnostic line to the output
pub struct Prompter<R, W> {
    input: R,
    output: W,
    retry: RetryPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            retry: RetryPolicy::unbounded(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// starting deposit between 1,000 and 1,500,000
    pub fn read_principal(&mut self) -> Result<Principal> {
        self.until_accepted("principal", |p| {
            let line = p.read_line(PRINCIPAL_PROMPT, "principal")?;
            parse_principal(&line)
        })
    }

    /// non-negative whole number for one part of the term
    pub fn read_whole_number(&mut self, prompt: &str, field: &str) -> Result<u32> {
        self.until_accepted(field, |p| {
            let line = p.read_line(prompt, field)?;
            parse_whole_number(&line, field)
        })
    }

    /// years then months; both are asked again when the combined term is out of range
    pub fn read_term(&mut self) -> Result<InvestmentTerm> {
        self.until_accepted("term", |p| {
            let years = p.read_whole_number(YEARS_PROMPT, "years")?;
            let months = p.read_whole_number(MONTHS_PROMPT, "months")?;
            InvestmentTerm::from_parts(years, months)
        })
    }

    /// menu choice for how often interest is paid
    pub fn read_frequency(&mut self, term: &InvestmentTerm) -> Result<InterestPaid> {
        let menu = menu_for(term);

        self.until_accepted("interest paid frequency", |p| {
            p.write_menu(&menu)?;
            let line = p.read_line(CHOICE_PROMPT, "interest paid frequency")?;
            parse_choice(&line, &menu)
        })
    }

    /// annual rate in percent; read once, never range-checked
    pub fn read_rate(&mut self) -> Result<Rate> {
        let line = self.read_line(RATE_PROMPT, "interest rate")?;
        let rate = Rate::parse_percent(&line).map_err(|_| DepositError::InvalidRate {
            input: line.clone(),
        })?;
        info!("accepted interest rate: {}", rate);
        Ok(rate)
    }

    /// write a line to the output sink
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn write_menu(&mut self, menu: &[InterestPaid]) -> Result<()> {
        writeln!(self.output, "{}", MENU_HEADER)?;
        for (i, option) in menu.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str, field: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DepositError::InputClosed {
                field: field.to_string(),
            });
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// run `attempt` until it succeeds; rejections are reported and retried,
    /// anything else is returned to the caller
    fn until_accepted<T, F>(&mut self, field: &str, mut attempt: F) -> Result<T>
    where
        T: std::fmt::Debug,
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mut rejected = 0u32;
        loop {
            match attempt(self) {
                Ok(value) => {
                    info!("accepted {}: {:?}", field, value);
                    return Ok(value);
                }
                Err(err) if err.is_rejection() => {
                    debug!("rejected {} attempt {}: {:?}", field, rejected + 1, err);
                    writeln!(self.output, "{}", err)?;
                    rejected += 1;
                    if self.retry.is_exhausted(rejected) {
                        return Err(DepositError::TooManyAttempts {
                            field: field.to_string(),
                            attempts: rejected,
                        });
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }
}
