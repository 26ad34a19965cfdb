//! Defensive payment handling: validation and receipts

pub mod receipt;
pub mod validation;

pub use receipt::{PaymentReceipt, PaymentStatus};
pub use validation::{AccountNumber, Cvv, DEFAULT_MAX_AMOUNT, PaymentValidator, ValidationError};
