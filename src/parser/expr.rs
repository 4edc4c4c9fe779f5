use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    program::program::Symbol,
};

use super::{
    lookups::{binary_symbol, infix_rule, prefix_rule, Precedence},
    parser::Parser,
};

/// Parses a full expression, the lowest level a top-level expression binds at.
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_precedence(parser, Precedence::Assignment)
}

pub fn parse_precedence(parser: &mut Parser, precedence: Precedence) -> Result<(), Error> {
    parser.enter()?;
    let result = parse_operand_and_operators(parser, precedence);
    parser.leave();
    result
}

fn parse_operand_and_operators(parser: &mut Parser, precedence: Precedence) -> Result<(), Error> {
    // First the prefix rule of the token just consumed
    let token = parser.advance().clone();
    let prefix = prefix_rule(token.kind).ok_or_else(|| expected_expression(&token))?;
    prefix(parser)?;

    // Then keep folding in operators that bind at least as tightly as `precedence`
    while precedence <= parser.current_token().precedence {
        let operator = parser.advance().clone();
        let infix = infix_rule(operator.kind).ok_or_else(|| expected_expression(&operator))?;
        infix(parser, operator.precedence)?;
    }

    Ok(())
}

pub fn parse_number(parser: &mut Parser) -> Result<(), Error> {
    let token = previous(parser)?;
    let value = token.value.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })?;

    parser.emit(Symbol::Constant(value));
    Ok(())
}

pub fn parse_unary(parser: &mut Parser) -> Result<(), Error> {
    // The operand goes out before the operator
    parse_precedence(parser, Precedence::Unary)?;
    parser.emit(Symbol::Negate);
    Ok(())
}

pub fn parse_grouping(parser: &mut Parser) -> Result<(), Error> {
    parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, |token| {
        ErrorImpl::ExpectedClosingParen { token }
    })?;
    Ok(())
}

pub fn parse_binary(parser: &mut Parser, precedence: Precedence) -> Result<(), Error> {
    let operator = previous(parser)?;
    let symbol = binary_symbol(operator.kind).ok_or_else(|| expected_expression(&operator))?;

    parse_precedence(parser, precedence.next())?;
    parser.emit(symbol);
    Ok(())
}

fn previous(parser: &Parser) -> Result<Token, Error> {
    match parser.previous_token() {
        Some(token) => Ok(token.clone()),
        None => Err(expected_expression(parser.current_token())),
    }
}

fn expected_expression(token: &Token) -> Error {
    Error::new(
        ErrorImpl::ExpectedExpression {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    )
}
