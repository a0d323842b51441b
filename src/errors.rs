use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepositError {
    #[error("Invalid input. Please enter a valid integer.")]
    InvalidInteger {
        input: String,
    },

    #[error("Invalid input. Please enter a value between 1,000 and 1,500,000.")]
    PrincipalOutOfRange {
        input: String,
    },

    #[error("Number of {field} need to be a whole number.")]
    NotWholeNumber {
        field: String,
        input: String,
    },

    #[error("The combined term should be between 3 months and 5 years. Enter again.")]
    TermOutOfRange {
        total_months: u64,
    },

    #[error("Invalid choice. Please enter a valid number.")]
    InvalidChoice {
        input: String,
    },

    #[error("invalid interest rate: {input:?}")]
    InvalidRate {
        input: String,
    },

    #[error("input closed while waiting for {field}")]
    InputClosed {
        field: String,
    },

    #[error("too many invalid attempts for {field}: {attempts}")]
    TooManyAttempts {
        field: String,
        attempts: u32,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DepositError {
    /// true for errors a retry loop recovers from by asking again
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DepositError::InvalidInteger { .. }
                | DepositError::PrincipalOutOfRange { .. }
                | DepositError::NotWholeNumber { .. }
                | DepositError::TermOutOfRange { .. }
                | DepositError::InvalidChoice { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DepositError>;
