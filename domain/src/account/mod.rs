//! Bank account with an internal audit trail
//!
//! Balance and transactions are private; the only way to change them is
//! through [`BankAccount::deposit`] and [`BankAccount::withdraw`], which
//! enforce the business rules and record every change.

pub mod transaction;

pub use transaction::{Transaction, TransactionKind};

use crate::core::money::Money;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0} amount must be positive")]
    NonPositiveAmount(TransactionKind),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Initial balance cannot be negative")]
    NegativeInitialBalance,

    #[error("Balance overflow")]
    Overflow,
}

#[derive(Debug, Clone)]
pub struct BankAccount {
    owner: String,
    balance: Money,
    transactions: Vec<Transaction>,
}

impl BankAccount {
    /// Open an account; a positive initial balance is recorded as a deposit
    pub fn new(owner: impl Into<String>, initial_balance: Money) -> Result<Self, AccountError> {
        if initial_balance.cents() < 0 {
            return Err(AccountError::NegativeInitialBalance);
        }
        let mut account = Self {
            owner: owner.into(),
            balance: initial_balance,
            transactions: Vec::new(),
        };
        if initial_balance.is_positive() {
            account.record(initial_balance, TransactionKind::Deposit, "Initial deposit");
        }
        Ok(account)
    }

    /// Deposit money, returning the new balance
    pub fn deposit(&mut self, amount: Money, description: &str) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(TransactionKind::Deposit));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        self.record(amount, TransactionKind::Deposit, description);
        Ok(self.balance)
    }

    /// Withdraw money, returning the new balance
    pub fn withdraw(&mut self, amount: Money, description: &str) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(TransactionKind::Withdrawal));
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;
        self.record(amount.negate(), TransactionKind::Withdrawal, description);
        Ok(self.balance)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Rendered statement lines, oldest first
    pub fn statement(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }

    fn record(&mut self, amount: Money, kind: TransactionKind, description: &str) {
        let sequence = self.transactions.len() as u64 + 1;
        self.transactions
            .push(Transaction::new(sequence, amount, kind, description));
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({}): ${}", self.owner, self.balance)
    }
}
