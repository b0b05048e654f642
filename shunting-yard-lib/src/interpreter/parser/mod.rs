mod infix_converter;

use crate::interpreter::error::InvalidExpressionError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::notation::Notation;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::{debug, trace};

/// Parses the given infix tokens into an equivalent expression tree,
/// which can be evaluated and re-printed.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The root of the expression tree, or an error carrying the tokens
/// if they do not form exactly one expression.
///
/// # Examples
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use shunting_yard::interpreter::parser::build_ast;
/// use shunting_yard::interpreter::token::Token;
///
/// let infix_tokens: Vec<Token> = vec!["2".parse()?, "^".parse()?, "3".parse()?];
/// let tree = build_ast(infix_tokens)?;
/// assert_eq!(tree.evaluate()?, 8.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn build_ast(infix_tokens: Vec<Token>) -> Result<Node, InvalidExpressionError> {
    parse(infix_tokens, Notation::Infix)
}

/// Parses tokens written in the given notation into an expression tree.
///
/// Prefix and postfix input is folded directly, so it must not contain parentheses.
pub fn parse(tokens: Vec<Token>, notation: Notation) -> Result<Node, InvalidExpressionError> {
    let expression = tokens.iter().join(" ");

    let tree = match notation {
        Notation::Infix => {
            let postfix_tokens = infix_to_postfix(tokens);
            trace!("Postfix order: {}", postfix_tokens.iter().join(" "));
            expression_tree::new_tree(postfix_tokens)
        }
        Notation::Prefix => expression_tree::new_tree_from_prefix(tokens),
        Notation::Postfix => expression_tree::new_tree(tokens),
    };

    tree.map_err(|error| {
        debug!("Rejected {} expression '{}': {:#}", notation, expression, error);
        InvalidExpressionError::new(expression)
    })
}
