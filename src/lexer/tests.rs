//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Numeric literals (integers, floats, exponents)
//! - Operators and grouping symbols
//! - Precedence assignment
//! - Spans
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::{errors::errors::ErrorImpl, parser::lookups::Precedence};

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 1e3", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "1e3");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / ( )", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
    assert_eq!(tokens[5].kind, TokenKind::CloseParen);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_assigns_precedence() {
    let tokens = tokenize("1 + 2 * ( 3 - 4 / 5 )", None).unwrap();
    let precedences: Vec<Precedence> = tokens.iter().map(|t| t.precedence).collect();

    assert_eq!(
        precedences,
        vec![
            Precedence::None,
            Precedence::Term,
            Precedence::None,
            Precedence::Factor,
            Precedence::None,
            Precedence::None,
            Precedence::Term,
            Precedence::None,
            Precedence::Factor,
            Precedence::None,
            Precedence::None,
            Precedence::EOF,
        ]
    );
}

#[test]
fn test_operators_bind_above_none() {
    let tokens = tokenize("+ - * /", None).unwrap();

    for token in tokens.iter().filter(|t| !t.is_eof()) {
        assert!(token.precedence > Precedence::None, "{}", token);
    }
}

#[test]
fn test_tokenize_whitespace() {
    let tokens = tokenize("  1 \t+\t\t2   ", None).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].value, "2");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize("", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "EOF");
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("10 + 200", Some("test.calc".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 8);
    assert_eq!(tokens[3].span.start.0, 8);
    assert_eq!(*tokens[0].span.start.1, "test.calc");
}

#[test]
fn test_tokenize_default_source_name() {
    let tokens = tokenize("1", None).unwrap();
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_tokenize_glued_symbols_are_rejected() {
    // No gluing beyond the whitespace boundary
    let error = tokenize("1 *2", None).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnrecognisedToken {
            token: "*2".to_string()
        }
    );
    assert_eq!(error.get_position().0, 2);

    assert!(tokenize("(1", None).is_err());
    assert!(tokenize("1+2", None).is_err());
}

#[test]
fn test_tokenize_signed_literal_is_a_number() {
    let tokens = tokenize("-2 - +3", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "-2");
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "+3");
}

#[test]
fn test_tokenize_unrecognised_token() {
    let error = tokenize("1 + x", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_unicode_is_rejected() {
    let error = tokenize("1 × 2", None).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnrecognisedToken {
            token: "×".to_string()
        }
    );
}
