use crate::interpreter::error::InvalidTokenError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeral together with the text it was written as.
    Number { value: f64, lexeme: Box<str> },
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// A number token spelled the way Rust formats its value.
    pub fn number(value: f64) -> Token {
        Token::Number {
            value,
            lexeme: value.to_string().into_boxed_str(),
        }
    }

    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Operator(operator) => Some(*operator),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { lexeme, .. } => write!(f, "{}", lexeme),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = InvalidTokenError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "(" => Ok(Token::LeftParenthesis),
            ")" => Ok(Token::RightParenthesis),
            input => match BinaryOperator::from_symbol(input) {
                Some(operator) => Ok(Token::Operator(operator)),
                None => parse_numeral(input),
            },
        }
    }
}

fn parse_numeral(text: &str) -> Result<Token, InvalidTokenError> {
    let value = text
        .parse::<f64>()
        .map_err(|_| InvalidTokenError::new(text))?;
    Ok(Token::Number {
        value,
        lexeme: text.into(),
    })
}
