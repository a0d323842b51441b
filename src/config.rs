use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::decimal::Money;
use crate::errors::{DepositError, Result};

/// calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub rounding: BalanceRounding,
    pub retry: RetryPolicy,
}

/// how the final balance is rounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceRounding {
    /// nearest whole unit, matches the bank's published figures
    #[default]
    WholeUnit,
    /// nearest cent
    Cents,
}

impl BalanceRounding {
    pub fn apply(&self, amount: Money) -> Money {
        match self {
            BalanceRounding::WholeUnit => amount.round_whole(),
            BalanceRounding::Cents => amount.round_dp(2),
        }
    }
}

/// retry behaviour of the input prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// give up after this many rejected attempts per field; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// true once `rejected` attempts exhaust the policy
    pub fn is_exhausted(&self, rejected: u32) -> bool {
        matches!(self.max_attempts, Some(max) if rejected >= max)
    }
}

impl CalculatorConfig {
    /// whole-unit rounding and unbounded retries
    pub fn bank_compatible() -> Self {
        Self::default()
    }

    pub fn with_rounding(mut self, rounding: BalanceRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.retry = RetryPolicy::bounded(max_attempts);
        self
    }

    /// parse from json, missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| DepositError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.retry.max_attempts == Some(0) {
            return Err(DepositError::InvalidConfiguration {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// serialize config to json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_is_bank_compatible() {
        let config = CalculatorConfig::bank_compatible();
        assert_eq!(config.rounding, BalanceRounding::WholeUnit);
        assert_eq!(config.retry.max_attempts, None);
        assert!(!config.retry.is_exhausted(u32::MAX));
    }

    #[test]
    fn test_rounding_apply() {
        let amount = Money::from_decimal(dec!(16150.2977));
        assert_eq!(BalanceRounding::WholeUnit.apply(amount), Money::from_major(16_150));
        assert_eq!(BalanceRounding::Cents.apply(amount), Money::from_decimal(dec!(16150.30)));
    }

    #[test]
    fn test_bounded_retry() {
        let policy = RetryPolicy::bounded(3);
        assert!(!policy.is_exhausted(2));
        assert!(policy.is_exhausted(3));
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalculatorConfig::from_json_str(r#"{"rounding": "cents"}"#).unwrap();
        assert_eq!(config.rounding, BalanceRounding::Cents);
        assert_eq!(config.retry, RetryPolicy::unbounded());

        let config =
            CalculatorConfig::from_json_str(r#"{"retry": {"max_attempts": 5}}"#).unwrap();
        assert_eq!(config.rounding, BalanceRounding::WholeUnit);
        assert_eq!(config.retry.max_attempts, Some(5));
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            CalculatorConfig::from_json_str(r#"{"retry": {"max_attempts": 0}}"#),
            Err(DepositError::InvalidConfiguration { .. })
        ));
        assert!(CalculatorConfig::from_json_str(r#"{"rounding": "dollars"}"#).is_err());
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let config = CalculatorConfig::default()
            .with_rounding(BalanceRounding::Cents)
            .with_max_attempts(4);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.json().as_bytes()).unwrap();

        let loaded = CalculatorConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
