use log::trace;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::config::BalanceRounding;
use crate::decimal::{Money, Rate};
use crate::errors::{DepositError, Result};

/// how interest is credited over the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    /// compounded `n` times per year
    Periodic(u32),
    /// simple interest credited once at the end of the term
    AtMaturity,
}

/// engine for term deposit maturity calculations
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundingEngine {
    pub rounding: BalanceRounding,
}

impl CompoundingEngine {
    pub fn new(rounding: BalanceRounding) -> Self {
        Self { rounding }
    }

    /// growth factor applied to the principal over the whole term
    pub fn compound_factor(
        &self,
        annual_rate: Rate,
        term_years: Decimal,
        compounding: Compounding,
    ) -> Result<Decimal> {
        let rate = annual_rate.as_decimal();

        match compounding {
            Compounding::AtMaturity => rate
                .checked_mul(term_years)
                .and_then(|interest| Decimal::ONE.checked_add(interest))
                .ok_or_else(|| overflow("simple interest factor")),
            Compounding::Periodic(0) => Err(DepositError::CalculationError {
                message: "compounding periods per year must be positive".to_string(),
            }),
            Compounding::Periodic(periods) => {
                let n = Decimal::from(periods);
                let base = Decimal::ONE + rate / n;
                let exponent = term_years * n;
                // (1 + r/n)^(n*t), t may be fractional
                base.checked_powd(exponent)
                    .ok_or_else(|| overflow("compound factor"))
            }
        }
    }

    /// final balance after the term, rounded per the engine's rounding
    pub fn final_balance(
        &self,
        principal: Money,
        annual_rate: Rate,
        term_years: Decimal,
        compounding: Compounding,
    ) -> Result<Money> {
        let factor = self.compound_factor(annual_rate, term_years, compounding)?;
        let unrounded = principal
            .as_decimal()
            .checked_mul(factor)
            .ok_or_else(|| overflow("final balance"))?;

        trace!(
            "principal {} rate {} term {} {:?}: factor {} unrounded {}",
            principal, annual_rate, term_years, compounding, factor, unrounded
        );

        Ok(self.rounding.apply(Money::from_decimal(unrounded)))
    }
}

fn overflow(what: &str) -> DepositError {
    DepositError::CalculationError {
        message: format!("{what} overflowed"),
    }
}

/// maturity balance rounded to the nearest whole unit
pub fn calculate_final_balance(
    principal: Money,
    annual_rate: Rate,
    term_years: Decimal,
    compounding: Compounding,
) -> Result<Money> {
    CompoundingEngine::new(BalanceRounding::WholeUnit).final_balance(
        principal,
        annual_rate,
        term_years,
        compounding,
    )
}
