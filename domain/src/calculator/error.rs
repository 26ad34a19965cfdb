//! Calculator errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid numbers in expression: {0}")]
    InvalidNumbers(String),

    #[error("No valid operator found in: {0}")]
    NoOperator(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Division by zero")]
    DivisionByZero,
}
