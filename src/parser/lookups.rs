use crate::{errors::errors::Error, lexer::tokens::TokenKind, program::program::Symbol};

use super::{expr::*, parser::Parser};

/// Binding precedence, ordered low to high.
///
/// `EOF` sits below `None` so the end-of-input sentinel never continues
/// an infix loop.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    EOF,
    None,
    Assignment,
    Term,
    Factor,
    Unary,
    Primary,
}

impl Precedence {
    /// The next-higher level. Right operands are parsed here, which makes
    /// operators of equal precedence group to the left.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::EOF => Precedence::None,
            Precedence::None => Precedence::Assignment,
            Precedence::Assignment => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Primary,
            Precedence::Primary => Precedence::Primary,
        }
    }
}

pub type PrefixHandler = fn(&mut Parser) -> Result<(), Error>;
pub type InfixHandler = fn(&mut Parser, Precedence) -> Result<(), Error>;

pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Plus | TokenKind::Dash => Precedence::Term,
        TokenKind::Star | TokenKind::Slash => Precedence::Factor,
        TokenKind::Number | TokenKind::OpenParen | TokenKind::CloseParen => Precedence::None,
        TokenKind::EOF => Precedence::EOF,
    }
}

pub fn prefix_rule(kind: TokenKind) -> Option<PrefixHandler> {
    match kind {
        TokenKind::Number => Some(parse_number as PrefixHandler),
        TokenKind::Dash => Some(parse_unary as PrefixHandler),
        TokenKind::OpenParen => Some(parse_grouping as PrefixHandler),
        TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::CloseParen
        | TokenKind::EOF => None,
    }
}

pub fn infix_rule(kind: TokenKind) -> Option<InfixHandler> {
    match kind {
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            Some(parse_binary as InfixHandler)
        }
        TokenKind::Number | TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::EOF => None,
    }
}

/// The symbol emitted by a binary operator token.
pub fn binary_symbol(kind: TokenKind) -> Option<Symbol> {
    match kind {
        TokenKind::Plus => Some(Symbol::Add),
        TokenKind::Dash => Some(Symbol::Subtract),
        TokenKind::Star => Some(Symbol::Multiply),
        TokenKind::Slash => Some(Symbol::Divide),
        TokenKind::Number | TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::EOF => None,
    }
}
