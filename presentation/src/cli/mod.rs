//! Command-line interface

pub mod account_op;
pub mod commands;
