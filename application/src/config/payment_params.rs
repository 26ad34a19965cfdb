//! Payment parameters for the payment use case.
//!
//! [`PaymentParams`] groups the limits that control
//! [`ProcessPaymentUseCase`](crate::use_cases::process_payment::ProcessPaymentUseCase).
//! Defaults keep debug logging off and bound both retries and timeout.

use pluggable_domain::Money;
use pluggable_domain::payment::DEFAULT_MAX_AMOUNT;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentParams {
    /// Log masked payment details at info level
    pub debug_mode: bool,
    /// Total gateway attempts for transient failures (at least 1)
    pub max_retry: u32,
    /// Timeout handed to the gateway for each attempt
    pub timeout: Duration,
    /// Largest accepted single payment
    pub max_amount: Money,
}

impl Default for PaymentParams {
    fn default() -> Self {
        Self {
            debug_mode: false,
            max_retry: 3,
            timeout: Duration::from_secs(30),
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl PaymentParams {
    // ==================== Builder Methods ====================

    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn with_max_retry(mut self, max: u32) -> Self {
        self.max_retry = max.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_amount(mut self, max_amount: Money) -> Self {
        self.max_amount = max_amount;
        self
    }
}
