use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;

/// A step of a depth-first walk over an expression tree. The root is at depth 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Visit {
    Operand { value: f64, depth: usize },
    EnterOperation { operator: BinaryOperator, depth: usize },
    BetweenOperands { operator: BinaryOperator },
    ExitOperation { operator: BinaryOperator },
}

enum Pending<'a> {
    Node(&'a Node, usize),
    Between(BinaryOperator),
    Exit(BinaryOperator),
}

/// Walks a tree over an explicit stack, so the depth of the tree is bounded
/// by memory rather than by the call stack.
pub(crate) struct Walk<'a> {
    pending: Vec<Pending<'a>>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Walk {
            pending: vec![Pending::Node(root, 0)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = match self.pending.pop()? {
            Pending::Node(Node::Operand(value), depth) => Visit::Operand {
                value: *value,
                depth,
            },
            Pending::Node(
                Node::Operation {
                    operator,
                    left_operand,
                    right_operand,
                },
                depth,
            ) => {
                // Pushed in reverse, the left operand comes off first.
                self.pending.push(Pending::Exit(*operator));
                self.pending.push(Pending::Node(right_operand, depth + 1));
                self.pending.push(Pending::Between(*operator));
                self.pending.push(Pending::Node(left_operand, depth + 1));
                Visit::EnterOperation {
                    operator: *operator,
                    depth,
                }
            }
            Pending::Between(operator) => Visit::BetweenOperands { operator },
            Pending::Exit(operator) => Visit::ExitOperation { operator },
        };
        Some(visit)
    }
}

/// Receives the steps of a walk started by `Node::accept`.
/// Every method does nothing unless implemented.
pub(crate) trait SyntaxVisitor {
    fn visit_operand(&mut self, _value: f64, _depth: usize) {}
    fn enter_operation(&mut self, _operator: BinaryOperator, _depth: usize) {}
    fn between_operands(&mut self, _operator: BinaryOperator) {}
    fn exit_operation(&mut self, _operator: BinaryOperator) {}
}
