use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{DepositError, Result};
use crate::interest::Compounding;

/// smallest accepted deposit
pub const MIN_PRINCIPAL: u32 = 1_000;
/// largest accepted deposit
pub const MAX_PRINCIPAL: u32 = 1_500_000;
/// shortest accepted term, three months
pub const MIN_TERM_MONTHS: u64 = 3;
/// longest accepted term, five years
pub const MAX_TERM_MONTHS: u64 = 5 * 12;

/// validated starting deposit in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(u32);

impl Principal {
    pub fn new(amount: i64) -> Result<Self> {
        if (MIN_PRINCIPAL as i64..=MAX_PRINCIPAL as i64).contains(&amount) {
            Ok(Principal(amount as u32))
        } else {
            Err(DepositError::PrincipalOutOfRange {
                input: amount.to_string(),
            })
        }
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    pub fn as_money(&self) -> Money {
        Money::from(self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// investment term, kept both as whole months and as years rounded to 2dp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentTerm {
    total_months: u32,
    years: Decimal,
}

impl InvestmentTerm {
    /// combine a years/months pair, rejecting terms outside 3 months..=5 years
    pub fn from_parts(years: u32, months: u32) -> Result<Self> {
        let total_months = years as u64 * 12 + months as u64;
        Self::from_total_months(total_months)
    }

    pub fn from_total_months(total_months: u64) -> Result<Self> {
        if !(MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(&total_months) {
            return Err(DepositError::TermOutOfRange { total_months });
        }
        let years = (Decimal::from(total_months) / Decimal::from(12)).round_dp(2);
        Ok(Self {
            total_months: total_months as u32,
            years,
        })
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    /// term in years, rounded to two decimal places
    pub fn years(&self) -> Decimal {
        self.years
    }

    pub fn is_under_one_year(&self) -> bool {
        self.years < Decimal::ONE
    }
}

impl fmt::Display for InvestmentTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years {} months",
            self.total_months / 12,
            self.total_months % 12
        )
    }
}

/// how often interest is paid, as offered by the frequency menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestPaid {
    Monthly,
    Quarterly,
    Annually,
    AtMaturity,
}

impl InterestPaid {
    /// every option in menu order
    pub const ALL: [InterestPaid; 4] = [
        InterestPaid::Monthly,
        InterestPaid::Quarterly,
        InterestPaid::Annually,
        InterestPaid::AtMaturity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestPaid::Monthly => "Monthly",
            InterestPaid::Quarterly => "Quarterly",
            InterestPaid::Annually => "Annually",
            InterestPaid::AtMaturity => "At Maturity",
        }
    }

    pub fn compounding(&self) -> Compounding {
        match self {
            InterestPaid::Monthly => Compounding::Periodic(12),
            InterestPaid::Quarterly => Compounding::Periodic(4),
            InterestPaid::Annually => Compounding::Periodic(1),
            InterestPaid::AtMaturity => Compounding::AtMaturity,
        }
    }

    /// periods per year; at maturity this is the term length itself
    pub fn periods_per_year(&self, term: &InvestmentTerm) -> Decimal {
        match self.compounding() {
            Compounding::Periodic(n) => Decimal::from(n),
            Compounding::AtMaturity => term.years(),
        }
    }
}

impl fmt::Display for InterestPaid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// fully validated calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub principal: Principal,
    pub rate: Rate,
    pub term: InvestmentTerm,
    pub interest_paid: InterestPaid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_principal_bounds() {
        assert_eq!(Principal::new(1_000).unwrap().amount(), 1_000);
        assert_eq!(Principal::new(1_500_000).unwrap().amount(), 1_500_000);
        assert!(matches!(
            Principal::new(999),
            Err(DepositError::PrincipalOutOfRange { .. })
        ));
        assert!(Principal::new(1_500_001).is_err());
        assert!(Principal::new(-5_000).is_err());
    }

    #[test]
    fn test_term_years_rounded_to_two_places() {
        assert_eq!(InvestmentTerm::from_parts(2, 3).unwrap().years(), dec!(2.25));
        assert_eq!(InvestmentTerm::from_parts(0, 5).unwrap().years(), dec!(0.42));
        assert_eq!(InvestmentTerm::from_parts(5, 0).unwrap().years(), dec!(5));
        assert_eq!(InvestmentTerm::from_parts(4, 9).unwrap().years(), dec!(4.75));
        assert_eq!(InvestmentTerm::from_parts(0, 7).unwrap().years(), dec!(0.58));
        assert_eq!(InvestmentTerm::from_parts(0, 38).unwrap().total_months(), 38);
    }

    #[test]
    fn test_term_bounds() {
        assert!(InvestmentTerm::from_parts(0, 3).is_ok());
        assert!(InvestmentTerm::from_parts(0, 60).is_ok());
        assert!(matches!(
            InvestmentTerm::from_parts(0, 2),
            Err(DepositError::TermOutOfRange { total_months: 2 })
        ));
        assert!(matches!(
            InvestmentTerm::from_parts(7, 1),
            Err(DepositError::TermOutOfRange { total_months: 85 })
        ));
        assert!(InvestmentTerm::from_parts(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_under_one_year() {
        assert!(InvestmentTerm::from_parts(0, 11).unwrap().is_under_one_year());
        assert!(!InvestmentTerm::from_parts(1, 0).unwrap().is_under_one_year());
    }

    #[test]
    fn test_periods_per_year() {
        let term = InvestmentTerm::from_parts(2, 6).unwrap();
        assert_eq!(InterestPaid::Monthly.periods_per_year(&term), dec!(12));
        assert_eq!(InterestPaid::Quarterly.periods_per_year(&term), dec!(4));
        assert_eq!(InterestPaid::Annually.periods_per_year(&term), dec!(1));
        assert_eq!(InterestPaid::AtMaturity.periods_per_year(&term), dec!(2.5));
        assert_eq!(InterestPaid::AtMaturity.to_string(), "At Maturity");
    }
}
