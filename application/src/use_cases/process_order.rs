//! Process Order use case
//!
//! Runs the order steps and confirms through an injected [`Notifier`].
//! The use case never knows which channel (or channels) it is talking to.

use crate::ports::notifier::{NotificationError, Notifier};
use pluggable_domain::StrategySlot;
use std::sync::Arc;
use tracing::{debug, info};

/// Message body sent with every order confirmation
pub const CONFIRMATION_MESSAGE: &str = "Thank you for your order!";

/// Result of a processed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: u64,
    pub recipient: String,
    pub subject: String,
}

/// Order processor with an injected notifier
#[derive(Clone)]
pub struct ProcessOrderUseCase {
    notifier: StrategySlot<dyn Notifier>,
}

impl ProcessOrderUseCase {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: StrategySlot::new(notifier),
        }
    }

    /// Process an order and notify `customer_contact`
    ///
    /// A notification failure is returned as-is.
    pub fn process_order(
        &self,
        order_id: u64,
        customer_contact: &str,
    ) -> Result<OrderConfirmation, NotificationError> {
        info!(order_id, "Processing order");
        debug!(order_id, "Validating order");
        debug!(order_id, "Charging payment");
        debug!(order_id, "Updating inventory");

        let subject = format!("Order {} Confirmed", order_id);
        self.notifier
            .current()
            .send(customer_contact, &subject, CONFIRMATION_MESSAGE)?;

        info!(order_id, channel = self.notifier.current().channel(), "Order completed");
        Ok(OrderConfirmation {
            order_id,
            recipient: customer_contact.to_string(),
            subject,
        })
    }

    /// Swap the notifier used by subsequent orders, returning the old one
    pub fn set_notifier(&mut self, notifier: Arc<dyn Notifier>) -> Arc<dyn Notifier> {
        self.notifier.replace(notifier)
    }
}
