use crate::interpreter::error::DivisionByZeroError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponentiate,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "%" => Some(BinaryOperator::Remainder),
            "^" => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Remainder => '%',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Remainder | BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to the two operands.
    ///
    /// `%` truncates both operands to integers before taking the remainder,
    /// and `^` is real exponentiation.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Remainder.apply(7.9, 2.5), Ok(1.0));
    /// assert!(BinaryOperator::Divide.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, DivisionByZeroError> {
        match self {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Subtract => Ok(left - right),
            BinaryOperator::Multiply => Ok(left * right),
            BinaryOperator::Divide if right == 0.0 => Err(DivisionByZeroError::new(left, *self)),
            BinaryOperator::Divide => Ok(left / right),
            BinaryOperator::Remainder => {
                let dividend = left as i64;
                let divisor = right as i64;
                if divisor == 0 {
                    return Err(DivisionByZeroError::new(left, *self));
                }
                Ok(dividend.wrapping_rem(divisor) as f64)
            }
            BinaryOperator::Exponentiate => Ok(left.powf(right)),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
