//! Process Payment use case
//!
//! Validates every input before touching the gateway, retries only
//! transient gateway failures, and returns an immutable receipt that holds
//! the masked account number only.

use crate::config::PaymentParams;
use crate::ports::payment_gateway::{ChargeRequest, GatewayError, PaymentGateway};
use pluggable_domain::{PaymentReceipt, PaymentStatus, PaymentValidator, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Payment processing failed after {attempts} attempt(s): {source}")]
    Processing {
        attempts: u32,
        #[source]
        source: GatewayError,
    },
}

pub struct ProcessPaymentUseCase {
    gateway: Arc<dyn PaymentGateway>,
    params: PaymentParams,
    validator: PaymentValidator,
    transaction_count: u64,
}

impl ProcessPaymentUseCase {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self::with_params(gateway, PaymentParams::default())
    }

    pub fn with_params(gateway: Arc<dyn PaymentGateway>, params: PaymentParams) -> Self {
        Self {
            gateway,
            validator: PaymentValidator::with_max_amount(params.max_amount),
            params,
            transaction_count: 0,
        }
    }

    pub fn params(&self) -> &PaymentParams {
        &self.params
    }

    /// Validate and charge. The CVV is never stored or logged.
    pub fn process_payment(
        &mut self,
        amount: &str,
        account_number: &str,
        cvv: &str,
    ) -> Result<PaymentReceipt, PaymentError> {
        let amount = self.validator.validate_amount(amount)?;
        let account = self.validator.validate_account(account_number)?;
        let cvv = self.validator.validate_cvv(cvv)?;

        let masked = account.masked();
        if self.params.debug_mode {
            info!(amount = %amount, account = %masked, "Processing payment");
        }

        let request = ChargeRequest {
            amount,
            account: &account,
            cvv: &cvv,
            timeout: self.params.timeout,
        };

        let max_attempts = self.params.max_retry.max(1);
        let mut attempt = 1;
        loop {
            match self.gateway.charge(&request) {
                Ok(()) => break,
                Err(e) if e.transient && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "Transient gateway failure, retrying");
                    attempt += 1;
                }
                Err(e) => {
                    return Err(PaymentError::Processing {
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }

        self.transaction_count += 1;
        let transaction_id = PaymentReceipt::transaction_id_for(self.transaction_count);
        debug!(transaction_id = %transaction_id, attempts = attempt, "Payment charged");

        Ok(PaymentReceipt::new(
            transaction_id,
            amount,
            masked,
            PaymentStatus::Success,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluggable_domain::Money;
    use std::sync::Mutex;

    /// Gateway that fails with scripted errors before succeeding
    struct ScriptedGateway {
        failures: Mutex<Vec<GatewayError>>,
        calls: Mutex<u32>,
    }

    impl ScriptedGateway {
        fn new(failures: Vec<GatewayError>) -> Arc<Self> {
            Arc::new(Self {
                failures: Mutex::new(failures),
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl PaymentGateway for ScriptedGateway {
        fn charge(&self, _request: &ChargeRequest<'_>) -> Result<(), GatewayError> {
            *self.calls.lock().unwrap() += 1;
            let mut failures = self.failures.lock().unwrap();
            if failures.is_empty() {
                Ok(())
            } else {
                Err(failures.remove(0))
            }
        }
    }

    const ACCOUNT: &str = "1234-5678-9012-3456";

    #[test]
    fn test_valid_payment_returns_receipt() {
        let gateway = ScriptedGateway::new(vec![]);
        let mut use_case = ProcessPaymentUseCase::new(gateway.clone());

        let receipt = use_case.process_payment("100.50", ACCOUNT, "123").unwrap();

        assert_eq!(receipt.transaction_id(), "TXN-000001");
        assert_eq!(receipt.amount(), Money::from_cents(10_050));
        assert_eq!(receipt.masked_account(), "****-****-****-3456");
        assert_eq!(receipt.status(), PaymentStatus::Success);
        assert_eq!(gateway.calls(), 1);

        let second = use_case.process_payment("1", ACCOUNT, "1234").unwrap();
        assert_eq!(second.transaction_id(), "TXN-000002");
    }

    #[test]
    fn test_validation_fails_before_gateway() {
        let gateway = ScriptedGateway::new(vec![]);
        let mut use_case = ProcessPaymentUseCase::new(gateway.clone());

        assert!(matches!(
            use_case.process_payment("-500", ACCOUNT, "123"),
            Err(PaymentError::Validation(ValidationError::NonPositiveAmount(_)))
        ));
        assert!(matches!(
            use_case.process_payment("100", "invalid", "123"),
            Err(PaymentError::Validation(ValidationError::AccountNotDigits))
        ));
        assert!(matches!(
            use_case.process_payment("100", ACCOUNT, ""),
            Err(PaymentError::Validation(ValidationError::CvvNotDigits))
        ));
        assert!(matches!(
            use_case.process_payment("1000000", ACCOUNT, "123"),
            Err(PaymentError::Validation(ValidationError::AmountExceedsLimit { .. }))
        ));
        assert_eq!(gateway.calls(), 0);
    }

    #[test]
    fn test_transient_failures_are_retried_within_budget() {
        let gateway = ScriptedGateway::new(vec![
            GatewayError::transient("timeout"),
            GatewayError::transient("timeout"),
        ]);
        let mut use_case = ProcessPaymentUseCase::new(gateway.clone());

        assert!(use_case.process_payment("10", ACCOUNT, "123").is_ok());
        assert_eq!(gateway.calls(), 3);
    }

    #[test]
    fn test_retry_budget_exhausted() {
        let gateway = ScriptedGateway::new(vec![GatewayError::transient("timeout"); 5]);
        let params = PaymentParams::default().with_max_retry(2);
        let mut use_case = ProcessPaymentUseCase::with_params(gateway.clone(), params);

        let err = use_case.process_payment("10", ACCOUNT, "123").unwrap_err();

        assert_eq!(
            err,
            PaymentError::Processing {
                attempts: 2,
                source: GatewayError::transient("timeout")
            }
        );
        assert_eq!(gateway.calls(), 2);
    }

    #[test]
    fn test_permanent_failure_is_not_retried() {
        let gateway = ScriptedGateway::new(vec![GatewayError::permanent("card declined")]);
        let mut use_case = ProcessPaymentUseCase::new(gateway.clone());

        let err = use_case.process_payment("10", ACCOUNT, "123").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Payment processing failed after 1 attempt(s): card declined"
        );
        assert_eq!(gateway.calls(), 1);
    }

    #[test]
    fn test_max_amount_from_params() {
        let gateway = ScriptedGateway::new(vec![]);
        let params = PaymentParams::default().with_max_amount(Money::from_units(50));
        let mut use_case = ProcessPaymentUseCase::with_params(gateway, params);
        assert!(use_case.process_payment("50", ACCOUNT, "123").is_ok());
        assert!(use_case.process_payment("50.01", ACCOUNT, "123").is_err());
    }
}
