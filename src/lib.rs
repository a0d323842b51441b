pub mod config;
pub mod decimal;
pub mod errors;
pub mod input;
pub mod interest;
pub mod session;
pub mod types;

// re-export key types
pub use config::{BalanceRounding, CalculatorConfig, RetryPolicy};
pub use decimal::{Money, Rate};
pub use errors::{DepositError, Result};
pub use input::{menu_for, Prompter};
pub use interest::{calculate_final_balance, Compounding, CompoundingEngine, MaturityCalculation};
pub use session::{DepositQuote, Session};
pub use types::{DepositRequest, InterestPaid, InvestmentTerm, Principal};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
