//! Application layer for pluggable
//!
//! This crate contains use cases (the orchestrators), port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PaymentParams;
pub use ports::{
    composite_notifier::CompositeNotifier,
    notifier::{NoNotifier, NotificationError, Notifier},
    payment_gateway::{ChargeRequest, GatewayError, PaymentGateway},
    user_repository::{RepositoryError, UserRepository},
};
pub use use_cases::calculate::{CalculationRecord, CalculatorWithHistoryUseCase};
pub use use_cases::convert_case::ConvertCaseUseCase;
pub use use_cases::generate_report::GenerateReportUseCase;
pub use use_cases::process_order::{OrderConfirmation, ProcessOrderUseCase};
pub use use_cases::process_payment::{PaymentError, ProcessPaymentUseCase};
pub use use_cases::register_user::{RegisterUserError, RegisterUserUseCase, UserReportUseCase};
