//! Cursor over the tokens of one input line.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_SPAN, MK_TOKEN,
};

/// Holds every token of one line and a single cursor into them.
///
/// The last token is always EOF. `advance` never moves past it, so the
/// cursor can not read beyond the sentinel however the parser behaves.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    previous: Option<usize>,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (end, file) = match tokens.last() {
                Some(token) => (token.span.end.0, Rc::clone(&token.span.end.1)),
                None => {
                    let null = Position::null();
                    (null.0, null.1)
                }
            };
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                MK_SPAN!(end, end, file)
            ));
        }

        TokenStream {
            tokens,
            pos: 0,
            previous: None,
        }
    }

    /// The token that would be consumed next.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&Token> {
        self.previous.map(|index| &self.tokens[index])
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.tokens[index].is_eof() {
            self.pos += 1;
        }
        self.previous = Some(index);
        &self.tokens[index]
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consumes the current token if it is of `kind`, otherwise builds an
    /// error from the offending lexeme, positioned at that token.
    pub fn consume(
        &mut self,
        kind: TokenKind,
        error: fn(String) -> ErrorImpl,
    ) -> Result<&Token, Error> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(Error::new(
                error(token.value.clone()),
                token.span.start.clone(),
            ))
        }
    }
}
