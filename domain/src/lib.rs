//! Domain layer for pluggable
//!
//! This crate contains the strategy contracts, their built-in variants, and
//! the value objects they operate on. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Strategy
//!
//! An interchangeable unit implementing one fixed operation contract:
//!
//! - [`ReportFormatter`]: records → text
//! - [`CaseTransform`]: text → text
//!
//! (The notification contract is an outgoing port and lives in the
//! application layer.)
//!
//! ## Registry / Slot
//!
//! - [`StrategyRegistry`]: look up a variant by key, failing fast on unknown keys
//! - [`StrategySlot`]: the single replaceable strategy an orchestrator holds

pub mod account;
pub mod calculator;
pub mod core;
pub mod payment;
pub mod report;
pub mod strategy;
pub mod text;
pub mod user;

// Re-export commonly used types
pub use account::{AccountError, BankAccount, Transaction, TransactionKind};
pub use calculator::{Calculator, CalculatorError, Expression, Operator, parse_expression};
pub use core::{
    error::DomainError,
    money::{Money, MoneyParseError},
};
pub use payment::{
    AccountNumber, Cvv, PaymentReceipt, PaymentStatus, PaymentValidator, ValidationError,
};
pub use report::{FieldValue, Record, ReportFormatter, Table, builtin_formatters};
pub use report::formats::{
    CsvFormatter, CsvReader, HtmlFormatter, JsonFormatter, MarkdownFormatter, TextFormatter,
};
pub use strategy::{StrategyRegistry, StrategySlot};
pub use text::{
    CaseTransform, LowerCase, TitleCase, UpperCase, builtin_case_transforms, change_case,
    greet_user, reverse_string, truncate_text,
};
pub use user::{EmailAddress, NewUser, User, UserId, UserValidationError};
