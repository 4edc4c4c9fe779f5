//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorPhase, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.calc".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_phase(), ErrorPhase::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: ")".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.calc");
}

#[test]
fn test_parse_error_phase() {
    for error_impl in [
        ErrorImpl::ExpectedExpression {
            token: "EOF".to_string(),
        },
        ErrorImpl::ExpectedClosingParen {
            token: "EOF".to_string(),
        },
        ErrorImpl::ExpectedEndOfExpression {
            token: "2".to_string(),
        },
        ErrorImpl::ExpressionTooDeep { limit: 256 },
    ] {
        assert_eq!(Error::new(error_impl, at(0)).get_phase(), ErrorPhase::Parse);
    }
}

#[test]
fn test_runtime_error_phase() {
    let error = Error::new(ErrorImpl::StackUnderflow, Position::null());

    assert_eq!(error.get_error_name(), "StackUnderflow");
    assert_eq!(error.get_phase(), ErrorPhase::Runtime);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::ExpectedEndOfExpression {
            token: "2".to_string(),
        },
        at(2),
    );

    assert_eq!(error.to_string(), "expect end of expression, found \"2\"");

    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: "EOF".to_string(),
        },
        at(3),
    );
    assert_eq!(error.to_string(), "expect expression, found \"EOF\"");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedClosingParen {
            token: "EOF".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`)`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_malformed_program_error() {
    let error = Error::new(ErrorImpl::MalformedProgram { remaining: 2 }, Position::null());

    assert_eq!(error.get_error_name(), "MalformedProgram");
    assert_eq!(
        error.to_string(),
        "malformed program: 2 values left on the stack"
    );
}
