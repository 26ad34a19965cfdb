//! Account transaction entries

use crate::core::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A recorded balance change; withdrawals carry a negative amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    sequence: u64,
    amount: Money,
    kind: TransactionKind,
    description: String,
}

impl Transaction {
    pub(crate) fn new(sequence: u64, amount: Money, kind: TransactionKind, description: &str) -> Self {
        Self {
            sequence,
            amount,
            kind,
            description: description.to_string(),
        }
    }

    /// Position in the account history, starting at 1
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:03} | {:10} | ${:>9} | {}",
            self.sequence,
            self.kind.as_str(),
            self.amount,
            self.description
        )
    }
}
