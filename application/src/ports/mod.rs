//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod composite_notifier;
pub mod notifier;
pub mod payment_gateway;
pub mod user_repository;
