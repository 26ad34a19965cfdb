//! Arithmetic operators

use super::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators, in parse precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Operators in the order the parser looks for them
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator; pure, no side effects
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(CalculatorError::DivisionByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| CalculatorError::UnknownOperator(s.to_string()))
            }
            _ => Err(CalculatorError::UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(10.0, 4.0), Ok(6.0));
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Divide.apply(20.0, 5.0), Ok(4.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalculatorError::UnknownOperator("%".into()))
        );
        assert!("++".parse::<Operator>().is_err());
    }
}
