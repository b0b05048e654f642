use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Reorders infix tokens into postfix order with the shunting-yard algorithm.
///
/// Every operator is treated as left-associative. Unbalanced parentheses are
/// tolerated here; whatever they leave behind is rejected when the tree is built.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Number { .. } => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::RightParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output),
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    output
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(token) = operators.pop() {
        match token {
            Token::LeftParenthesis => trace!("Dropping unmatched open parenthesis"),
            token => output.push(token),
        }
    }
}

fn parse_closing_parenthesis_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(token) = operators.pop() {
        if token == Token::LeftParenthesis {
            // Discard the open parenthesis.
            return;
        }
        output.push(token);
    }
    trace!("Closing parenthesis has no matching open parenthesis");
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.last().and_then(Token::as_operator) {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        operators.pop();
        output.push(top_of_operator_stack.token());
    }

    operators.push(operator.token());
}
