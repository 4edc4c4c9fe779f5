use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN, SHELL_SOURCE,
};

use super::tokens::{Token, TokenKind, SYMBOL_LOOKUP};

lazy_static! {
    /// A maximal run of non-whitespace bytes; the line is split on ASCII whitespace only.
    static ref PIECE: Regex = Regex::new("[^ \\t\\n\\r\\x0C]+").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from(SHELL_SOURCE))
        };

        Lexer {
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {:?} `{}`", token.kind, token.value);
        self.tokens.push(token);
    }

    /// Classifies one whitespace-delimited piece starting at byte `start`.
    pub fn classify(&mut self, piece: &str, start: usize) -> Result<(), Error> {
        let span = MK_SPAN!(start, start + piece.len(), self.file);

        if let Some(kind) = SYMBOL_LOOKUP.get(piece) {
            self.push(MK_TOKEN!(*kind, String::from(piece), span));
            return Ok(());
        }

        if piece.parse::<f64>().is_ok() {
            self.push(MK_TOKEN!(TokenKind::Number, String::from(piece), span));
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: String::from(piece),
            },
            span.start,
        ))
    }
}

/// Splits `source` into tokens, terminated by exactly one EOF token.
///
/// Fails on the first piece that is neither a number nor a known symbol;
/// no partial token sequence is returned in that case.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);

    for piece in PIECE.find_iter(source) {
        lex.classify(piece.as_str(), piece.start())?;
    }

    let end = source.len();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        MK_SPAN!(end, end, lex.file)
    ));
    Ok(lex.tokens)
}
