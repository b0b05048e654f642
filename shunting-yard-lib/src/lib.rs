//! Tokenizes, parses and evaluates arithmetic expressions using the shunting-yard algorithm.
//!
//! The parsed expression tree can be evaluated, re-printed in infix, prefix and postfix
//! notation, or drawn as a tree.

pub mod interpreter;
