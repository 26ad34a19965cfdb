//! Presentation layer for pluggable
//!
//! This crate contains the CLI definitions and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::account_op::{AccountOp, AccountOpError};
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
