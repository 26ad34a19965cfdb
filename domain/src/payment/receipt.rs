//! Immutable payment receipt

use crate::core::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Success,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Success => write!(f, "SUCCESS"),
        }
    }
}

/// Outcome of a processed payment (Value Object)
///
/// Carries only the masked account; the full number and CVV are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    transaction_id: String,
    amount: Money,
    masked_account: String,
    status: PaymentStatus,
}

impl PaymentReceipt {
    pub fn new(
        transaction_id: impl Into<String>,
        amount: Money,
        masked_account: impl Into<String>,
        status: PaymentStatus,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            masked_account: masked_account.into(),
            status,
        }
    }

    /// Sequential id of the form `TXN-000001`
    pub fn transaction_id_for(sequence: u64) -> String {
        format!("TXN-{:06}", sequence)
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn masked_account(&self) -> &str {
        &self.masked_account
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }
}
