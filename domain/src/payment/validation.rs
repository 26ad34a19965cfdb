//! Fail-fast payment input validation

use crate::core::money::{Money, MoneyParseError};
use std::fmt;
use thiserror::Error;

/// Default upper bound for a single payment
pub const DEFAULT_MAX_AMOUNT: Money = Money::from_units(10_000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    InvalidAmount(#[from] MoneyParseError),

    #[error("Amount must be positive, got: {0}")]
    NonPositiveAmount(Money),

    #[error("Amount exceeds limit: {amount} > {limit}")]
    AmountExceedsLimit { amount: Money, limit: Money },

    #[error("Account number must contain only digits")]
    AccountNotDigits,

    #[error("Account number must be 16 digits, got: {0}")]
    AccountLength(usize),

    #[error("CVV must contain only digits")]
    CvvNotDigits,

    #[error("CVV must be 3 or 4 digits, got: {0}")]
    CvvLength(usize),
}

/// A validated 16-digit card account number.
///
/// `Debug` shows only the masked form so the full number cannot leak
/// through logs or panics.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Only the last four digits are visible
    pub fn masked(&self) -> String {
        let last4 = &self.0[self.0.len() - 4..];
        format!("****-****-****-{}", last4)
    }

    /// Full digit string, for handing to a gateway
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccountNumber").field(&self.masked()).finish()
    }
}

/// A validated card verification value. Never displayed.
#[derive(Clone, PartialEq, Eq)]
pub struct Cvv(String);

impl Cvv {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cvv(***)")
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Validates raw payment inputs
#[derive(Debug, Clone, Copy)]
pub struct PaymentValidator {
    max_amount: Money,
}

impl Default for PaymentValidator {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl PaymentValidator {
    pub fn with_max_amount(max_amount: Money) -> Self {
        Self { max_amount }
    }

    pub fn max_amount(&self) -> Money {
        self.max_amount
    }

    pub fn validate_amount(&self, raw: &str) -> Result<Money, ValidationError> {
        let amount: Money = raw.parse()?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        if amount > self.max_amount {
            return Err(ValidationError::AmountExceedsLimit {
                amount,
                limit: self.max_amount,
            });
        }
        Ok(amount)
    }

    /// Dashes and spaces are ignored
    pub fn validate_account(&self, raw: &str) -> Result<AccountNumber, ValidationError> {
        let clean: String = raw.chars().filter(|c| *c != '-' && *c != ' ').collect();
        if !all_digits(&clean) {
            return Err(ValidationError::AccountNotDigits);
        }
        if clean.len() != 16 {
            return Err(ValidationError::AccountLength(clean.len()));
        }
        Ok(AccountNumber(clean))
    }

    pub fn validate_cvv(&self, raw: &str) -> Result<Cvv, ValidationError> {
        if !all_digits(raw) {
            return Err(ValidationError::CvvNotDigits);
        }
        if !(3..=4).contains(&raw.len()) {
            return Err(ValidationError::CvvLength(raw.len()));
        }
        Ok(Cvv(raw.to_string()))
    }
}
