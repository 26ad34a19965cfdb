//! Expression parsing

use super::error::CalculatorError;
use super::operator::Operator;

/// A parsed `a <op> b` expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
}

impl Expression {
    pub fn evaluate(&self) -> Result<f64, CalculatorError> {
        self.operator.apply(self.left, self.right)
    }
}

/// Parse `a <op> b`.
///
/// Operators are tried in the order `+ - * /`; the first one present splits
/// the expression, which must then have exactly two numeric operands.
/// `"-5 + 3"` parses, `"5 - -3"` does not.
pub fn parse_expression(expr: &str) -> Result<Expression, CalculatorError> {
    let expr = expr.trim();

    let operator = Operator::ALL
        .into_iter()
        .find(|op| expr.contains(op.symbol()))
        .ok_or_else(|| CalculatorError::NoOperator(expr.to_string()))?;

    let parts: Vec<&str> = expr.split(operator.symbol()).collect();
    let [left, right] = parts.as_slice() else {
        return Err(CalculatorError::InvalidExpression(expr.to_string()));
    };

    let invalid = || CalculatorError::InvalidNumbers(expr.to_string());
    let left: f64 = left.trim().parse().map_err(|_| invalid())?;
    let right: f64 = right.trim().parse().map_err(|_| invalid())?;

    Ok(Expression {
        left,
        operator,
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let e = parse_expression(" 5 + 3 ").unwrap();
        assert_eq!(e.left, 5.0);
        assert_eq!(e.operator, Operator::Add);
        assert_eq!(e.right, 3.0);
    }

    #[test]
    fn test_parse_negative_left_operand_with_plus() {
        let e = parse_expression("-5 + 3").unwrap();
        assert_eq!(e.left, -5.0);
        assert_eq!(e.evaluate(), Ok(-2.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_expression("5 - -3"),
            Err(CalculatorError::InvalidExpression("5 - -3".into()))
        );
        assert_eq!(
            parse_expression("a * b"),
            Err(CalculatorError::InvalidNumbers("a * b".into()))
        );
        assert_eq!(
            parse_expression("42"),
            Err(CalculatorError::NoOperator("42".into()))
        );
        assert_eq!(
            parse_expression("1 + 2 + 3"),
            Err(CalculatorError::InvalidExpression("1 + 2 + 3".into()))
        );
    }
}
