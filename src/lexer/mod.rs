//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts one line of input
//! into a stream of tokens for parsing. It handles:
//!
//! - Splitting the line on whitespace
//! - Recognition of number literals and operator symbols
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
