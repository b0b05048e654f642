use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// A lexical fragment that is neither a numeral, an operator nor a parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token: {operator}")]
pub struct InvalidTokenError {
    pub operator: String,
}

impl InvalidTokenError {
    pub fn new(operator: impl Into<String>) -> InvalidTokenError {
        InvalidTokenError {
            operator: operator.into(),
        }
    }
}

/// A token sequence that does not fold into exactly one expression tree.
/// Carries the offending tokens, joined by spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid expression: {expression}")]
pub struct InvalidExpressionError {
    pub expression: String,
}

impl InvalidExpressionError {
    pub fn new(expression: impl Into<String>) -> InvalidExpressionError {
        InvalidExpressionError {
            expression: expression.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("division by zero: {dividend} {operator} 0")]
pub struct DivisionByZeroError {
    pub dividend: f64,
    pub operator: BinaryOperator,
}

impl DivisionByZeroError {
    pub fn new(dividend: f64, operator: BinaryOperator) -> DivisionByZeroError {
        DivisionByZeroError { dividend, operator }
    }
}
