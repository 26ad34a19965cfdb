//! Four-operator calculator
//!
//! Parsing, operator lookup and evaluation are separate pure pieces so each
//! can be tested on its own; history tracking lives in the application layer.

pub mod error;
pub mod operator;
pub mod parser;

pub use error::CalculatorError;
pub use operator::Operator;
pub use parser::{Expression, parse_expression};

/// Stateless calculator: parse, then evaluate
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn calculate(&self, expr: &str) -> Result<f64, CalculatorError> {
        parse_expression(expr)?.evaluate()
    }
}
