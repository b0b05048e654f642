pub mod expression_tree;
pub mod notation;
pub(crate) mod syntax_visitor;
pub mod tree_printer;
