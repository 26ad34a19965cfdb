//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: shape violations and unsupported variant lookups
//! - [`money::Money`]: integer-cent amounts used by accounts and payments

pub mod error;
pub mod money;
