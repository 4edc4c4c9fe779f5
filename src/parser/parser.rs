//! Parser implementation producing a postfix program.
//!
//! The parser owns the token stream of a single line and the program it
//! emits into. Both are created per call to [`parse`] and discarded (or
//! handed back) when it returns, so nothing carries over between lines.

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    program::program::{Program, Symbol},
};

use super::{expr::parse_expr, stream::TokenStream};

/// Deepest nesting of sub-expressions a single line may contain.
pub const MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Tokens of the line being parsed
    stream: TokenStream,
    /// Postfix output, append-only while parsing
    program: Program,
    /// Number of `parse_precedence` calls currently active
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `tokens` with an empty program.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            stream: TokenStream::new(tokens),
            program: Program::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.stream.peek()
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> Option<&Token> {
        self.stream.previous()
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> &Token {
        self.stream.advance()
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise the error
    /// built by `error` from the current lexeme.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: fn(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        self.stream.consume(expected_kind, error).cloned()
    }

    /// Enters one more level of nesting, failing past [`MAX_DEPTH`].
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            let token = self.stream.peek();
            return Err(Error::new(
                ErrorImpl::ExpressionTooDeep { limit: MAX_DEPTH },
                token.span.start.clone(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Appends a symbol to the program.
    pub fn emit(&mut self, symbol: Symbol) {
        trace!("emit {}", symbol);
        self.program.emit(symbol);
    }

    pub fn into_program(self) -> Program {
        self.program
    }
}

/// Parses the tokens of one line into a postfix program.
///
/// The whole line must form exactly one expression; anything left over
/// is reported as `ExpectedEndOfExpression`. On error no partial program
/// is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    parse_expr(&mut parser)?;
    parser.expect_error(TokenKind::EOF, |token| ErrorImpl::ExpectedEndOfExpression {
        token,
    })?;

    Ok(parser.into_program())
}
