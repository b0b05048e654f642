use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::SyntaxVisitor;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

/// Where operators are written relative to their operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Between the operands, e.g. `1 + 2`.
    Infix,
    /// Before the operands, e.g. `+ 1 2`.
    Prefix,
    /// After the operands, e.g. `1 2 +`.
    Postfix,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Prefix => write!(f, "prefix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

/// Collects node labels in the order a parenthesis-free notation writes them.
struct NotationVisitor {
    notation: Notation,
    symbols: Vec<String>,
}

impl SyntaxVisitor for NotationVisitor {
    fn visit_operand(&mut self, value: f64, _depth: usize) {
        self.symbols.push(value.to_string());
    }

    fn enter_operation(&mut self, operator: BinaryOperator, _depth: usize) {
        if self.notation == Notation::Prefix {
            self.symbols.push(operator.to_string());
        }
    }

    fn exit_operation(&mut self, operator: BinaryOperator) {
        if self.notation == Notation::Postfix {
            self.symbols.push(operator.to_string());
        }
    }
}

/// Renders the tree as space-separated symbols in prefix or postfix order.
/// Infix order is ambiguous without parentheses, see `Node::to_infix` instead.
pub(crate) fn render(root: &Node, notation: Notation) -> String {
    let mut visitor = NotationVisitor {
        notation,
        symbols: Vec::new(),
    };
    root.accept(&mut visitor);
    visitor.symbols.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_example_renders_in_polish_notation() {
        // 2 + 3 * 4
        let product = Node::new_operation(
            BinaryOperator::Multiply,
            Node::new_operand(3.0),
            Node::new_operand(4.0),
        );
        let root = Node::new_operation(BinaryOperator::Add, Node::new_operand(2.0), product);

        assert_eq!(render(&root, Notation::Prefix), "+ 2 * 3 4");
        assert_eq!(render(&root, Notation::Postfix), "2 3 4 * +");
    }
}
