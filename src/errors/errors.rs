use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedClosingParen { .. } => "ExpectedClosingParen",
            ErrorImpl::ExpectedEndOfExpression { .. } => "ExpectedEndOfExpression",
            ErrorImpl::ExpressionTooDeep { .. } => "ExpressionTooDeep",
            ErrorImpl::StackUnderflow => "StackUnderflow",
            ErrorImpl::StackOverflow { .. } => "StackOverflow",
            ErrorImpl::MalformedProgram { .. } => "MalformedProgram",
        }
    }

    /// Which phase of the pipeline raised the error.
    pub fn get_phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorPhase::Lex
            }
            ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::ExpectedClosingParen { .. }
            | ErrorImpl::ExpectedEndOfExpression { .. }
            | ErrorImpl::ExpressionTooDeep { .. } => ErrorPhase::Parse,
            ErrorImpl::StackUnderflow
            | ErrorImpl::StackOverflow { .. }
            | ErrorImpl::MalformedProgram { .. } => ErrorPhase::Runtime,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is neither a number nor one of + - * / ( ), are tokens separated by spaces?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`",
                token
            )),
            ErrorImpl::ExpectedExpression { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, `-` or `(`",
                token
            )),
            ErrorImpl::ExpectedClosingParen { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a `)`?",
                token
            )),
            ErrorImpl::ExpectedEndOfExpression { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::ExpressionTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::StackUnderflow => ErrorTip::None,
            ErrorImpl::StackOverflow { limit } => ErrorTip::Suggestion(format!(
                "The evaluation stack holds at most {} values",
                limit
            )),
            ErrorImpl::MalformedProgram { remaining } => ErrorTip::Suggestion(format!(
                "Program finished with {} values on the stack, expected exactly 1",
                remaining
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorPhase {
    Lex,
    Parse,
    Runtime,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expect expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("expect ')' after expression, found {token:?}")]
    ExpectedClosingParen { token: String },
    #[error("expect end of expression, found {token:?}")]
    ExpectedEndOfExpression { token: String },
    #[error("expression nested deeper than {limit} levels")]
    ExpressionTooDeep { limit: usize },
    #[error("stack underflow")]
    StackUnderflow,
    #[error("stack overflow: more than {limit} values")]
    StackOverflow { limit: usize },
    #[error("malformed program: {remaining} values left on the stack")]
    MalformedProgram { remaining: usize },
}
