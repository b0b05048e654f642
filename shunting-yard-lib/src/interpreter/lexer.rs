use crate::interpreter::error::InvalidTokenError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::{debug, trace};
use logos::Logos;

/// The raw lexical classes the scanner splits an expression into.
/// Whether a fragment is an acceptable token is decided afterwards.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Fragment {
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Numeral,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    #[regex(r"[^ \t\r\n\fA-Za-z0-9_.]")]
    Punctuation,
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, or the first fragment that is not
/// a numeral, an operator or a parenthesis.
///
/// # Examples
///
/// ```
/// use shunting_yard::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("(1+2) * 3").unwrap();
/// assert_eq!(tokens.len(), 7);
///
/// let error = tokenize("1 @ 2").unwrap_err();
/// assert_eq!(error.operator, "@");
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, InvalidTokenError> {
    let mut lexer = Fragment::lexer(expression);
    let mut tokens = Vec::new();

    while let Some(fragment) = lexer.next() {
        let text = lexer.slice();
        trace!("Scanned {:?} as {:?}", text, fragment);
        tokens.push(text.parse::<Token>()?);
    }

    debug!("Tokenized {:?} into [{}]", expression, tokens.iter().join(", "));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn fragments(expression: &str) -> Vec<String> {
        tokenize(expression)
            .unwrap()
            .iter()
            .map(Token::to_string)
            .collect()
    }

    #[parameterized(
    expression = {
    "1 + 2 * 3",
    "(1+2)*3",
    "  7%2^ 3 ",
    "1.5e3 / .5",
    "10 - -3",
    "2.50*4.",
    },
    expected = {
    vec!["1", "+", "2", "*", "3"],
    vec!["(", "1", "+", "2", ")", "*", "3"],
    vec!["7", "%", "2", "^", "3"],
    vec!["1.5e3", "/", ".5"],
    vec!["10", "-", "-", "3"],
    vec!["2.50", "*", "4."],
    }
    )]
    fn valid_expression_returns_tokens_as_written(expression: &str, expected: Vec<&str>) {
        use pretty_assertions::assert_eq;
        assert_eq!(fragments(expression), expected);
    }

    #[test]
    fn empty_expression_returns_no_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize(" \t\n").unwrap(), vec![]);
    }

    #[parameterized(
    expression = { "1 @ 2", "2 * abc", "3 + 4 $", "1 . 2", "1 # 2" },
    offending = { "@", "abc", "$", ".", "#" }
    )]
    fn invalid_fragment_returns_err(expression: &str, offending: &str) {
        use pretty_assertions::assert_eq;
        let error = tokenize(expression).unwrap_err();
        assert_eq!(error, InvalidTokenError::new(offending));
    }

    #[test]
    fn words_accepted_by_the_float_parser_are_numerals() {
        let tokens = tokenize("inf").unwrap();

        assert!(matches!(&tokens[..], [Token::Number { value, .. }] if value.is_infinite()));
    }

    #[test]
    fn sign_is_never_part_of_a_numeral() {
        let tokens = tokenize("-1").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].as_operator().is_some());
        assert_eq!(tokens[1], Token::number(1.0));
    }
}
