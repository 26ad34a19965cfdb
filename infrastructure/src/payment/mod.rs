//! Payment gateway adapters

mod simulated;

pub use simulated::SimulatedPaymentGateway;
