//! Payment gateway port
//!
//! The card network boundary. Adapters own their transport; the use case
//! owns validation, retry limits and receipts.

use pluggable_domain::{AccountNumber, Cvv, Money};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    /// Whether retrying the same charge may succeed
    pub transient: bool,
}

impl GatewayError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: true,
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: false,
        }
    }
}

/// A charge request handed to the gateway
#[derive(Debug)]
pub struct ChargeRequest<'a> {
    pub amount: Money,
    pub account: &'a AccountNumber,
    pub cvv: &'a Cvv,
    pub timeout: Duration,
}

/// Port for charging a card
pub trait PaymentGateway: Send + Sync {
    fn charge(&self, request: &ChargeRequest<'_>) -> Result<(), GatewayError>;
}
