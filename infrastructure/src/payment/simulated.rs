//! Simulated card network
//!
//! Approves every charge except for a small set of declined account numbers.
//! A configurable number of leading attempts can fail transiently so the
//! retry path can be exercised from the CLI.

use pluggable_application::{ChargeRequest, GatewayError, PaymentGateway};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

#[derive(Default)]
pub struct SimulatedPaymentGateway {
    declined_suffixes: Vec<String>,
    transient_failures: u32,
    attempts: AtomicU32,
}

impl SimulatedPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decline any account whose number ends with `suffix`
    pub fn decline_accounts_ending_with(mut self, suffix: impl Into<String>) -> Self {
        self.declined_suffixes.push(suffix.into());
        self
    }

    /// Fail the first `count` charges with a transient error
    pub fn with_transient_failures(mut self, count: u32) -> Self {
        self.transient_failures = count;
        self
    }

    /// Charges attempted so far
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl PaymentGateway for SimulatedPaymentGateway {
    fn charge(&self, request: &ChargeRequest<'_>) -> Result<(), GatewayError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            attempt,
            account = %request.account.masked(),
            timeout_secs = request.timeout.as_secs(),
            "Simulated charge"
        );

        if attempt <= self.transient_failures {
            return Err(GatewayError::transient("card network timed out"));
        }

        let number = request.account.digits();
        if self
            .declined_suffixes
            .iter()
            .any(|suffix| number.ends_with(suffix.as_str()))
        {
            return Err(GatewayError::permanent("card declined"));
        }

        Ok(())
    }
}
