#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorPhase, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    program::program::Program,
    vm::machine::Machine,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod program;
pub mod vm;

extern crate regex;

/// Name given to input that did not come from a named source.
pub const SHELL_SOURCE: &str = "shell";

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses one line into its postfix program.
pub fn compile(line: &str, source: Option<String>) -> Result<Program, Error> {
    let tokens = tokenize(line, source)?;
    debug!("tokenized {} tokens", tokens.len());

    let program = parse(tokens)?;
    debug!("parsed into {} symbols: {}", program.len(), program);

    Ok(program)
}

/// Compiles one line and executes it on a fresh stack machine.
pub fn interpret(line: &str, source: Option<String>) -> Result<f64, Error> {
    let program = compile(line, source)?;
    Machine::new().run(&program)
}

/// Renders a diagnostic for an error raised while handling `line`.
///
/// ```text
/// Error: UnrecognisedToken (...)
/// -> shell
///   |
/// 1 | 1 + x
///   | ----^
/// ```
pub fn format_error(error: &Error, line: &str) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    // Runtime errors have no meaningful column.
    if error.get_phase() == ErrorPhase::Runtime {
        return header;
    }

    let position = error.get_position();
    let line_string = String::from("1");
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line);
    let line_pos = (position.0 as usize).min(line.len());
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    format!(
        "{header}-> {source}\n{bar:>padding$}\n{line_string} | {text}\n{bar:>padding$} {caret:->arrows$}\n",
        source = position.1,
        bar = "|",
        text = line_text_removed.trim_end(),
        caret = "^",
    )
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    (trimmed, string.len() - trimmed.len())
}
