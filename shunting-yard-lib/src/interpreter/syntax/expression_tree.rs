use crate::interpreter::error::DivisionByZeroError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::notation::{render, Notation};
use crate::interpreter::syntax::syntax_visitor::{SyntaxVisitor, Visit, Walk};
use crate::interpreter::syntax::tree_printer::print_tree;
use crate::interpreter::token::Token;
use crate::interpreter::tokens_to_string;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::mem;

/// A node of an arithmetic expression tree. Every operation owns exactly
/// two children, so the root owns the whole tree.
///
/// Trees of any depth can be walked, compared and dropped; none of these
/// recurse on the call stack.
pub enum Node {
    // Terminal symbols (leaves)
    Operand(f64),
    // Non-terminal symbols (non-leaves)
    Operation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_operand(value: f64) -> Node {
        Node::Operand(value)
    }

    pub fn new_operation(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::Operation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub(crate) fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Calls the visitor method matching each step of a depth-first walk.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        for visit in self.walk() {
            match visit {
                Visit::Operand { value, depth } => visitor.visit_operand(value, depth),
                Visit::EnterOperation { operator, depth } => visitor.enter_operation(operator, depth),
                Visit::BetweenOperands { operator } => visitor.between_operands(operator),
                Visit::ExitOperation { operator } => visitor.exit_operation(operator),
            }
        }
    }

    /// The number of edges on the longest path from this node down to a leaf.
    /// A leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.walk()
            .filter_map(|visit| match visit {
                Visit::Operand { depth, .. } => Some(depth),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Computes the value of the expression, evaluating children before their parent.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> anyhow::Result<()> {
    /// use shunting_yard::interpreter::convert;
    ///
    /// assert_eq!(convert("8 - 3 - 2")?.evaluate()?, 3.0);
    /// assert!(convert("1 / (2 - 2)")?.evaluate().is_err());
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn evaluate(&self) -> Result<f64, DivisionByZeroError> {
        let mut values: Vec<f64> = Vec::new();

        for visit in self.walk() {
            match visit {
                Visit::Operand { value, .. } => values.push(value),
                Visit::ExitOperation { operator } => {
                    // Both operands of an operation are evaluated before it is exited.
                    if let (Some(right), Some(left)) = (values.pop(), values.pop()) {
                        values.push(operator.apply(left, right)?);
                    }
                }
                Visit::EnterOperation { .. } | Visit::BetweenOperands { .. } => {}
            }
        }

        Ok(values.pop().unwrap_or(f64::NAN))
    }

    /// Regenerates the infix tokens of the expression, with every operation
    /// wrapped in parentheses.
    pub fn to_infix_tokens(&self) -> Vec<Token> {
        let mut visitor = InfixTokenVisitor { tokens: Vec::new() };
        self.accept(&mut visitor);
        visitor.tokens
    }

    /// Renders the expression fully parenthesized, e.g. `(1 + (2 * 3))`.
    pub fn to_infix(&self) -> String {
        tokens_to_string(&self.to_infix_tokens())
    }

    /// Renders the expression in Polish notation, e.g. `+ 1 * 2 3`.
    pub fn to_prefix(&self) -> String {
        render(self, Notation::Prefix)
    }

    /// Renders the expression in reverse Polish notation, e.g. `1 2 3 * +`.
    pub fn to_postfix(&self) -> String {
        render(self, Notation::Postfix)
    }

    pub fn to_notation(&self, notation: Notation) -> String {
        match notation {
            Notation::Infix => self.to_infix(),
            Notation::Prefix | Notation::Postfix => render(self, notation),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buffer: Vec<u8> = Vec::new();
        print_tree(self, &mut buffer).map_err(|_| fmt::Error)?;
        let text = String::from_utf8(buffer).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

struct InfixTokenVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for InfixTokenVisitor {
    fn visit_operand(&mut self, value: f64, _depth: usize) {
        self.tokens.push(Token::number(value));
    }

    fn enter_operation(&mut self, _operator: BinaryOperator, _depth: usize) {
        self.tokens.push(Token::LeftParenthesis);
    }

    fn between_operands(&mut self, operator: BinaryOperator) {
        self.tokens.push(operator.token());
    }

    fn exit_operation(&mut self, _operator: BinaryOperator) {
        self.tokens.push(Token::RightParenthesis);
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.to_infix())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.walk().eq(other.walk())
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut detached: Vec<Node> = Vec::new();
        detach_operations(self, &mut detached);
        // Each detached node is dropped with leaves as its only children.
        while let Some(mut node) = detached.pop() {
            detach_operations(&mut node, &mut detached);
        }
    }
}

/// Moves the operation children of the node onto the list, leaving leaves in their place.
fn detach_operations(node: &mut Node, detached: &mut Vec<Node>) {
    if let Node::Operation {
        left_operand,
        right_operand,
        ..
    } = node
    {
        for child in [left_operand, right_operand] {
            if matches!(**child, Node::Operation { .. }) {
                detached.push(mem::replace(&mut **child, Node::Operand(0.0)));
            }
        }
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: Vec<Token>) -> Result<Node> {
    fold_tokens(postfix_tokens.into_iter(), OperandOrder::RightFirst)
}

/// Generates an expression tree based off of tokens ordered in prefix notation.
pub fn new_tree_from_prefix(prefix_tokens: Vec<Token>) -> Result<Node> {
    fold_tokens(prefix_tokens.into_iter().rev(), OperandOrder::LeftFirst)
}

/// Which operand is on top of the stack when an operator is folded.
enum OperandOrder {
    LeftFirst,
    RightFirst,
}

fn fold_tokens(tokens: impl Iterator<Item = Token>, order: OperandOrder) -> Result<Node> {
    let mut operands: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Number { value, .. } => operands.push(Node::new_operand(value)),
            Token::Operator(operator) => {
                let first = operands
                    .pop()
                    .with_context(|| format!("Expected two operands for '{}'", operator))?;
                let second = operands
                    .pop()
                    .with_context(|| format!("Expected a second operand for '{}'", operator))?;

                let node = match order {
                    OperandOrder::RightFirst => Node::new_operation(operator, second, first),
                    OperandOrder::LeftFirst => Node::new_operation(operator, first, second),
                };
                operands.push(node);
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                bail!("There should not be any parenthesis present in the input")
            }
        }
    }

    let root = operands.pop().context("No tree root found")?;
    if !operands.is_empty() {
        bail!("{} operand(s) are not connected to the root", operands.len());
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_returns_correct_tree() {
        let tokens = create_simple_postfix_tokens();
        let expected_tree = create_simple_tree();

        let actual_tree = new_tree(tokens).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn complex_expression_returns_correct_tree() {
        let tokens = create_complex_postfix_tokens();
        let expected_tree = create_complex_tree();

        let actual_tree = new_tree(tokens).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn prefix_tokens_return_same_tree_as_postfix_tokens() {
        let prefix_tokens = create_complex_prefix_tokens();
        let expected_tree = create_complex_tree();

        let actual_tree = new_tree_from_prefix(prefix_tokens).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn dangling_operator_returns_err() {
        let tokens = vec![Token::number(1.0), BinaryOperator::Add.token()];

        new_tree(tokens).expect_err("Should return Err");
    }

    #[test]
    fn disconnected_operands_return_err() {
        let tokens = vec![Token::number(1.0), Token::number(2.0)];

        new_tree(tokens).expect_err("Should return Err");
    }

    #[test]
    fn empty_input_returns_err() {
        new_tree(vec![]).expect_err("Should return Err");
    }

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        print!("{}", tree);
    }

    #[test]
    fn complex_tree_evaluates_children_first() {
        // 1 + (2 + 3) * 4
        let tree = create_complex_tree();

        assert_eq!(tree.evaluate(), Ok(21.0));
    }

    #[test]
    fn division_by_zero_anywhere_in_tree_is_reported() {
        let zero = Node::new_operation(
            BinaryOperator::Subtract,
            Node::new_operand(2.0),
            Node::new_operand(2.0),
        );
        let tree = Node::new_operation(
            BinaryOperator::Add,
            Node::new_operand(1.0),
            Node::new_operation(BinaryOperator::Divide, Node::new_operand(5.0), zero),
        );

        let error = tree.evaluate().unwrap_err();

        assert_eq!(error, DivisionByZeroError::new(5.0, BinaryOperator::Divide));
    }

    #[test]
    fn simple_tree_converts_back_to_infix_tokens() {
        let expected_tokens = create_simple_infix_tokens();
        let tree = create_simple_tree();

        let actual_tokens = tree.to_infix_tokens();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn complex_tree_renders_in_every_notation() {
        let tree = create_complex_tree();

        assert_eq!(tree.to_infix(), "(1 + ((2 + 3) * 4))");
        assert_eq!(tree.to_prefix(), "+ 1 * + 2 3 4");
        assert_eq!(tree.to_postfix(), "1 2 3 + 4 * +");
    }

    #[test]
    fn leaf_renders_its_numeral_in_every_notation() {
        let leaf = Node::new_operand(2.5);

        assert_eq!(leaf.to_infix(), "2.5");
        assert_eq!(leaf.to_prefix(), "2.5");
        assert_eq!(leaf.to_postfix(), "2.5");
        assert_eq!(leaf.depth(), 0);
    }

    #[test]
    fn depth_counts_edges_on_the_longest_path() {
        assert_eq!(create_simple_tree().depth(), 1);
        assert_eq!(create_complex_tree().depth(), 3);
    }

    #[test]
    fn trees_differing_in_one_leaf_are_not_equal() {
        let changed = Node::new_operation(
            BinaryOperator::Add,
            Node::new_operand(1.0),
            Node::new_operand(3.0),
        );

        assert_ne!(create_simple_tree(), changed);
    }

    #[test]
    fn very_deep_tree_is_evaluated_rendered_and_dropped() {
        let mut tree = Node::new_operand(1.0);
        for _ in 0..100_000 {
            tree = Node::new_operation(BinaryOperator::Subtract, tree, Node::new_operand(1.0));
        }

        assert_eq!(tree.depth(), 100_000);
        assert_eq!(tree.evaluate(), Ok(-99_999.0));
        assert!(tree.to_infix().starts_with("(((("));
        assert!(tree.to_postfix().ends_with("1 -"));
        assert!(tree.to_prefix().starts_with("- - - -"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let tree = create_complex_tree();

        let first = (tree.to_prefix(), tree.evaluate());
        let second = (tree.to_prefix(), tree.evaluate());

        assert_eq!(first, second);
    }

    fn create_simple_tree() -> Node {
        let x = Node::new_operand(1.0);
        let y = Node::new_operand(2.0);
        Node::new_operation(BinaryOperator::Add, x, y)
    }

    fn create_simple_postfix_tokens() -> Vec<Token> {
        // 1 + 2 (but in postfix notation)
        vec![Token::number(1.0), Token::number(2.0), BinaryOperator::Add.token()]
    }

    fn create_simple_infix_tokens() -> Vec<Token> {
        // (1 + 2)
        vec![
            Token::LeftParenthesis,
            Token::number(1.0),
            BinaryOperator::Add.token(),
            Token::number(2.0),
            Token::RightParenthesis,
        ]
    }

    fn create_complex_postfix_tokens() -> Vec<Token> {
        // 1 + ((2 + 3) * 4) (but in postfix notation)
        vec![
            Token::number(1.0),
            Token::number(2.0),
            Token::number(3.0),
            BinaryOperator::Add.token(),
            Token::number(4.0),
            BinaryOperator::Multiply.token(),
            BinaryOperator::Add.token(),
        ]
    }

    fn create_complex_prefix_tokens() -> Vec<Token> {
        // 1 + ((2 + 3) * 4) (but in prefix notation)
        vec![
            BinaryOperator::Add.token(),
            Token::number(1.0),
            BinaryOperator::Multiply.token(),
            BinaryOperator::Add.token(),
            Token::number(2.0),
            Token::number(3.0),
            Token::number(4.0),
        ]
    }

    fn create_complex_tree() -> Node {
        let one = Node::new_operand(1.0);
        let two = Node::new_operand(2.0);
        let three = Node::new_operand(3.0);
        let four = Node::new_operand(4.0);
        let second_plus = Node::new_operation(BinaryOperator::Add, two, three);
        let star = Node::new_operation(BinaryOperator::Multiply, second_plus, four);
        Node::new_operation(BinaryOperator::Add, one, star)
    }
}
