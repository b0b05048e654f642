use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{debug, error, info, Level};
use shunting_yard::interpreter::convert_notation;
use shunting_yard::interpreter::lexer::tokenize;
use shunting_yard::interpreter::parser::parse;
use shunting_yard::interpreter::syntax::expression_tree::Node;
use shunting_yard::interpreter::syntax::notation::Notation;
use shunting_yard::interpreter::syntax::tree_printer::print_tree;
use shunting_yard::interpreter::tokens_to_string;
use std::io;
use std::io::{BufRead, Write};

/// Parses arithmetic expressions, then evaluates them or prints them in other notations
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to process. An interactive menu starts when it is omitted
    expression: Option<String>,

    /// What to do with the expression given on the command line
    #[clap(short, long, value_enum, default_value = "evaluate")]
    action: Action,

    /// The notation the expression is written in
    #[clap(short, long, value_enum, default_value = "infix")]
    notation: InputNotation,

    #[clap(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    /// Print the value of the expression
    Evaluate,
    /// Print the expression in infix, prefix and postfix notation
    Notations,
    /// Draw the expression tree
    Tree,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum InputNotation {
    Infix,
    Prefix,
    Postfix,
}

impl From<InputNotation> for Notation {
    fn from(notation: InputNotation) -> Self {
        match notation {
            InputNotation::Infix => Notation::Infix,
            InputNotation::Prefix => Notation::Prefix,
            InputNotation::Postfix => Notation::Postfix,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    init_logger(&args.verbose);

    let notation = Notation::from(args.notation);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.expression {
        Some(expression) => {
            let root = convert_notation(&expression, notation)?;
            perform(args.action, &root, &mut out)
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_menu(&mut input, &mut out, notation)
        }
    }
}

fn init_logger(verbosity: &Verbosity<InfoLevel>) {
    env_logger::Builder::new()
        .filter_level(verbosity.log_level_filter())
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

/// Writes the outcome of the action on the expression tree.
fn perform(action: Action, root: &Node, out: &mut impl Write) -> Result<()> {
    match action {
        Action::Evaluate => {
            let result = root.evaluate().context("Could not evaluate expression")?;
            writeln!(out, "Result: {}", result)?;
        }
        Action::Notations => {
            writeln!(out, "Infix: {}", root.to_infix())?;
            writeln!(out, "Prefix: {}", root.to_prefix())?;
            writeln!(out, "Postfix: {}", root.to_postfix())?;
        }
        Action::Tree => print_tree(root, out)?,
    }
    Ok(())
}

enum Choice {
    Perform(Action),
    Exit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().parse::<u8>().ok()? {
        1 => Some(Choice::Perform(Action::Evaluate)),
        2 => Some(Choice::Perform(Action::Notations)),
        3 => Some(Choice::Perform(Action::Tree)),
        4 => Some(Choice::Exit),
        _ => None,
    }
}

fn read_expression(expression: &str, notation: Notation) -> Result<Node> {
    let tokens = tokenize(expression)?;
    debug!("Tokens: {}", tokens_to_string(&tokens));
    Ok(parse(tokens, notation)?)
}

/// Repeatedly asks for an expression and what to do with it, until the input
/// ends or the user chooses to exit. Bad input is reported and asked for again.
fn run_menu(input: &mut impl BufRead, out: &mut impl Write, notation: Notation) -> Result<()> {
    let mut lines = input.lines();

    loop {
        info!("Enter expression");
        let expression = match lines.next() {
            Some(line) => line.context("Could not read expression")?,
            None => return Ok(()),
        };

        let root = match read_expression(&expression, notation) {
            Ok(root) => root,
            Err(err) => {
                error!("{:#}", err);
                continue;
            }
        };

        info!("[1] Evaluate an expression");
        info!("[2] Convert an expression to infix, prefix, and postfix notations");
        info!("[3] Print the expression tree");
        info!("[4] Exit");
        info!("Enter choice:");
        let choice = match lines.next() {
            Some(line) => line.context("Could not read choice")?,
            None => return Ok(()),
        };

        match parse_choice(&choice) {
            Some(Choice::Perform(action)) => {
                if let Err(err) = perform(action, &root, out) {
                    error!("{:#}", err);
                }
            }
            Some(Choice::Exit) => return Ok(()),
            None => error!("Invalid choice"),
        }
    }
}
