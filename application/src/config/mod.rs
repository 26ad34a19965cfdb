//! Application-level configuration.
//!
//! - [`PaymentParams`]: payment limits, retry budget and timeout

pub mod payment_params;

pub use payment_params::PaymentParams;
