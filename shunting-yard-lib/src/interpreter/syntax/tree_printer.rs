use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::Visit;
use std::io;

/// Written once per level above the parent of a node.
const CONTINUATION: &str = "│  ";
/// Written before every node except the root.
const BRANCH: &str = "├─ ";

/// Writes an indented drawing of the tree, one node per line, depth first.
/// The root is unindented and children are listed left before right.
///
/// A node at depth `d` is prefixed with `d - 1` continuations and a branch,
/// whether or not it is the last child of its parent.
///
/// # Examples
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use shunting_yard::interpreter::convert;
/// use shunting_yard::interpreter::syntax::tree_printer::print_tree;
///
/// let tree = convert("1 + 2 * 3")?;
/// let mut drawing: Vec<u8> = Vec::new();
/// print_tree(&tree, &mut drawing)?;
///
/// assert_eq!(String::from_utf8(drawing)?, "+\n├─ 1\n├─ *\n│  ├─ 2\n│  ├─ 3\n");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn print_tree(root: &Node, out: &mut impl io::Write) -> io::Result<()> {
    for visit in root.walk() {
        match visit {
            Visit::Operand { value, depth } => print_line(out, depth, value)?,
            Visit::EnterOperation { operator, depth } => print_line(out, depth, operator)?,
            Visit::BetweenOperands { .. } | Visit::ExitOperation { .. } => {}
        }
    }
    Ok(())
}

fn print_line(out: &mut impl io::Write, depth: usize, label: impl std::fmt::Display) -> io::Result<()> {
    if depth > 0 {
        for _ in 1..depth {
            out.write_all(CONTINUATION.as_bytes())?;
        }
        out.write_all(BRANCH.as_bytes())?;
    }
    writeln!(out, "{}", label)
}
