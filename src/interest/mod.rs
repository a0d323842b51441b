pub mod compound;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::DepositRequest;

pub use compound::{calculate_final_balance, Compounding, CompoundingEngine};

/// maturity calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityCalculation {
    pub principal: Money,
    pub rate: Rate,
    pub term_years: Decimal,
    pub compounding: Compounding,
    pub final_balance: Money,
    pub interest_earned: Money,
}

impl CompoundingEngine {
    /// run the calculation for an already validated request
    pub fn calculate(&self, request: &DepositRequest) -> Result<MaturityCalculation> {
        let principal = request.principal.as_money();
        let term_years = request.term.years();
        let compounding = request.interest_paid.compounding();

        let final_balance = self.final_balance(principal, request.rate, term_years, compounding)?;

        Ok(MaturityCalculation {
            principal,
            rate: request.rate,
            term_years,
            compounding,
            final_balance,
            interest_earned: final_balance - principal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BalanceRounding;
    use crate::types::{InterestPaid, InvestmentTerm, Principal};
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_request() {
        let request = DepositRequest {
            principal: Principal::new(10_000).unwrap(),
            rate: Rate::from_percent(dec!(1.10)),
            term: InvestmentTerm::from_parts(3, 0).unwrap(),
            interest_paid: InterestPaid::AtMaturity,
        };

        let result = CompoundingEngine::new(BalanceRounding::WholeUnit)
            .calculate(&request)
            .unwrap();

        assert_eq!(result.final_balance, Money::from_major(10_330));
        assert_eq!(result.interest_earned, Money::from_major(330));
        assert_eq!(result.compounding, Compounding::AtMaturity);
        assert_eq!(result.term_years, dec!(3));
    }

    #[test]
    fn test_calculate_request_uses_rounded_term() {
        // 5 months is 0.42 years after rounding
        let request = DepositRequest {
            principal: Principal::new(100_000).unwrap(),
            rate: Rate::from_percent(dec!(4)),
            term: InvestmentTerm::from_parts(0, 5).unwrap(),
            interest_paid: InterestPaid::AtMaturity,
        };

        let result = CompoundingEngine::default().calculate(&request).unwrap();
        assert_eq!(result.final_balance, Money::from_major(101_680));
    }
}
