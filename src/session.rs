use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::input::Prompter;
use crate::interest::{CompoundingEngine, MaturityCalculation};
use crate::types::{DepositRequest, InterestPaid, Principal};

pub const TERM_INSTRUCTIONS: &str = "\
Enter the investment term in years and months separately (between 3 months to 5 years)
  For example:
    - 2 years and 3 months: Enter 2 for years and 3 for months.
    - 5 months: Enter 0 for years and 5 for months.
    - 3 years: Enter 3 for years and 0 for months.";

pub const FINAL_BALANCE_LABEL: &str = "Final balance: ";

/// serializable view of a finished calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositQuote {
    pub principal: Principal,
    pub interest_rate: Rate,
    pub term_months: u32,
    pub term_years: Decimal,
    pub interest_paid: InterestPaid,
    pub periods_per_year: Decimal,
    pub final_balance: Money,
    pub interest_earned: Money,
}

impl DepositQuote {
    pub fn new(request: &DepositRequest, calculation: &MaturityCalculation) -> Self {
        Self {
            principal: request.principal,
            interest_rate: request.rate,
            term_months: request.term.total_months(),
            term_years: request.term.years(),
            interest_paid: request.interest_paid,
            periods_per_year: request.interest_paid.periods_per_year(&request.term),
            final_balance: calculation.final_balance,
            interest_earned: calculation.interest_earned,
        }
    }

    /// serialize quote to json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// one calculator run: prompts in order, then prints the final balance
pub struct Session {
    config: CalculatorConfig,
}

impl Session {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// principal, rate, term and frequency, in that order
    pub fn collect_request<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<DepositRequest> {
        let principal = prompter.read_principal()?;
        let rate = prompter.read_rate()?;
        prompter.say(TERM_INSTRUCTIONS)?;
        let term = prompter.read_term()?;
        let interest_paid = prompter.read_frequency(&term)?;

        Ok(DepositRequest {
            principal,
            rate,
            term,
            interest_paid,
        })
    }

    /// price a validated request
    pub fn quote(&self, request: &DepositRequest) -> Result<DepositQuote> {
        let calculation = CompoundingEngine::new(self.config.rounding).calculate(request)?;
        let quote = DepositQuote::new(request, &calculation);
        info!(
            "quoted {} at {} for {} paid {}: {}",
            quote.principal, quote.interest_rate, request.term, quote.interest_paid, quote.final_balance
        );
        Ok(quote)
    }

    /// run the full interactive flow over the given line source and sink
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<DepositQuote> {
        let mut prompter = Prompter::new(input, output).with_retry_policy(self.config.retry);

        let request = self.collect_request(&mut prompter)?;
        let quote = self.quote(&request)?;

        writeln!(prompter.output_mut(), "{}{}", FINAL_BALANCE_LABEL, quote.final_balance)?;
        Ok(quote)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CalculatorConfig::bank_compatible())
    }
}
