pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::syntax::notation::Notation;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use syntax::expression_tree::Node;

/// Converts the given input string into an equivalent expression tree,
/// which can be evaluated and printed in other notations.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use shunting_yard::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "1 + 2 * 3";
/// let tree = convert(expression)?;
/// assert_eq!(tree.to_infix(), "(1 + (2 * 3))");
/// assert_eq!(tree.evaluate()?, 7.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    convert_notation(expression, Notation::Infix)
}

/// Converts an expression written in the given notation into an expression tree.
///
/// # Examples
///
/// ```
/// use shunting_yard::interpreter::convert_notation;
/// use shunting_yard::interpreter::syntax::notation::Notation;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert_notation("+ 2 * 3 4", Notation::Prefix)?;
/// assert_eq!(tree.to_postfix(), "2 3 4 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert_notation(expression: &str, notation: Notation) -> Result<Node> {
    let tokens = lexer::tokenize(expression)
        .with_context(|| format!("Could not tokenize '{}'", expression))?;
    let expression_tree = parser::parse(tokens, notation)?;
    debug!(
        "Parsed {} expression into {} (depth {})",
        notation,
        expression_tree.to_infix(),
        expression_tree.depth()
    );
    Ok(expression_tree)
}

/// Pretty-prints the given tokens with added whitespace around operators.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use shunting_yard::interpreter::tokens_to_string;
/// use shunting_yard::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("(1+2)*3").unwrap();
/// assert_eq!(tokens_to_string(&tokens), "(1 + 2) * 3");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut text = String::with_capacity(tokens.len() * 2);

    for token in tokens {
        match token {
            Token::Operator(operator) => {
                text.push(' ');
                text.push(operator.symbol());
                text.push(' ');
            }
            _ => text.push_str(&token.to_string()),
        }
    }

    text
}
