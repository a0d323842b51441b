use std::num::IntErrorKind;

use crate::errors::{DepositError, Result};
use crate::types::{InterestPaid, InvestmentTerm, Principal};

/// thousands separator accepted in principal input
const THOUSANDS_SEPARATOR: char = ',';

/// parse a principal such as "10,000", rejecting non-integers and out-of-range amounts
pub fn parse_principal(text: &str) -> Result<Principal> {
    let cleaned: String = text.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();

    let out_of_range = || DepositError::PrincipalOutOfRange {
        input: text.to_string(),
    };

    match cleaned.trim().parse::<i64>() {
        Ok(amount) => Principal::new(amount).map_err(|_| out_of_range()),
        // well-formed but huge integers are a range problem, not a format one
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(out_of_range())
        }
        Err(_) => Err(DepositError::InvalidInteger {
            input: text.to_string(),
        }),
    }
}

/// accept only non-empty ascii digit strings; oversized values saturate to `u32::MAX`
pub fn parse_whole_number(text: &str, field: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DepositError::NotWholeNumber {
            field: field.to_string(),
            input: text.to_string(),
        });
    }
    Ok(text.parse::<u32>().unwrap_or(u32::MAX))
}

/// frequency options offered for a term, in menu order
///
/// there is no annual option for terms shorter than a year
pub fn menu_for(term: &InvestmentTerm) -> Vec<InterestPaid> {
    InterestPaid::ALL
        .into_iter()
        .filter(|option| !(term.is_under_one_year() && *option == InterestPaid::Annually))
        .collect()
}

/// resolve a 1-based menu choice
pub fn parse_choice(text: &str, menu: &[InterestPaid]) -> Result<InterestPaid> {
    let invalid = || DepositError::InvalidChoice {
        input: text.to_string(),
    };

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let index: usize = text.parse().map_err(|_| invalid())?;

    index
        .checked_sub(1)
        .and_then(|i| menu.get(i))
        .copied()
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_with_and_without_separators() {
        assert_eq!(parse_principal("10000").unwrap().amount(), 10_000);
        assert_eq!(parse_principal("10,000").unwrap().amount(), 10_000);
        assert_eq!(parse_principal("1,500,000").unwrap().amount(), 1_500_000);
        assert_eq!(parse_principal("1,000").unwrap().amount(), 1_000);
        assert_eq!(parse_principal(" 5000 ").unwrap().amount(), 5_000);
    }

    #[test]
    fn test_principal_parse_failures() {
        for input in ["abc", "1405.83", "", "12a", "$1000"] {
            assert!(
                matches!(parse_principal(input), Err(DepositError::InvalidInteger { .. })),
                "{input:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_principal_range_failures() {
        for input in ["200", "999", "1,500,001", "-1000", "0", "99999999999999999999999"] {
            assert!(
                matches!(parse_principal(input), Err(DepositError::PrincipalOutOfRange { .. })),
                "{input:?} should be a range error"
            );
        }
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(parse_whole_number("5", "years").unwrap(), 5);
        assert_eq!(parse_whole_number("0", "months").unwrap(), 0);
        assert_eq!(parse_whole_number("99999999999", "years").unwrap(), u32::MAX);

        for input in ["abc", "-5", "@", "", "1.5", " 3"] {
            let err = parse_whole_number(input, "months").unwrap_err();
            assert_eq!(err.to_string(), "Number of months need to be a whole number.");
        }
    }

    #[test]
    fn test_menu_excludes_annually_under_one_year() {
        let short = InvestmentTerm::from_parts(0, 6).unwrap();
        assert_eq!(
            menu_for(&short),
            vec![InterestPaid::Monthly, InterestPaid::Quarterly, InterestPaid::AtMaturity]
        );

        let year = InvestmentTerm::from_parts(1, 0).unwrap();
        assert_eq!(menu_for(&year), InterestPaid::ALL.to_vec());
    }

    #[test]
    fn test_choice_resolution() {
        let long = InvestmentTerm::from_parts(1, 6).unwrap();
        let menu = menu_for(&long);
        assert_eq!(parse_choice("1", &menu).unwrap(), InterestPaid::Monthly);
        assert_eq!(parse_choice("2", &menu).unwrap(), InterestPaid::Quarterly);
        assert_eq!(parse_choice("3", &menu).unwrap(), InterestPaid::Annually);
        assert_eq!(parse_choice("4", &menu).unwrap(), InterestPaid::AtMaturity);

        let short = InvestmentTerm::from_parts(0, 9).unwrap();
        let menu = menu_for(&short);
        assert_eq!(parse_choice("3", &menu).unwrap(), InterestPaid::AtMaturity);
        assert!(parse_choice("4", &menu).is_err());
    }

    #[test]
    fn test_choice_rejections() {
        let menu = InterestPaid::ALL.to_vec();
        for input in ["0", "5", "-1", "one", "", "99999999999999999999999"] {
            assert!(matches!(
                parse_choice(input, &menu),
                Err(DepositError::InvalidChoice { .. })
            ));
        }
    }
}
