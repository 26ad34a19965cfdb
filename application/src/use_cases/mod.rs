//! Use cases
//!
//! Application-level operations that orchestrate domain logic. Each
//! orchestrator holds its strategy or port behind a trait object and never
//! branches on the concrete type.

pub mod calculate;
pub mod convert_case;
pub mod generate_report;
pub mod process_order;
pub mod process_payment;
pub mod register_user;
