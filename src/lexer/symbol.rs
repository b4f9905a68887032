//! Parsers for the single-character operators and parentheses.

use nom::{branch::alt, character::complete::char, Parser};

use super::{token::Kind, LexResult};

/// Parses any operator or parenthesis from `input`.
pub fn glyph(input: &str) -> LexResult<'_> {
    alt((plus, minus, star, slash, left_paren, right_paren)).parse(input)
}

/// Parses a [`Kind::Addition`] from `input`.
fn plus(input: &str) -> LexResult<'_> {
    char('+').parse(input).map(|(tail, _)| (tail, Kind::Addition))
}

/// Parses a [`Kind::Subtraction`] from `input`.
fn minus(input: &str) -> LexResult<'_> {
    char('-')
        .parse(input)
        .map(|(tail, _)| (tail, Kind::Subtraction))
}

/// Parses a [`Kind::Multiplication`] from `input`.
fn star(input: &str) -> LexResult<'_> {
    char('*')
        .parse(input)
        .map(|(tail, _)| (tail, Kind::Multiplication))
}

/// Parses a [`Kind::Division`] from `input`.
fn slash(input: &str) -> LexResult<'_> {
    char('/').parse(input).map(|(tail, _)| (tail, Kind::Division))
}

/// Parses a [`Kind::LParen`] from `input`.
fn left_paren(input: &str) -> LexResult<'_> {
    char('(').parse(input).map(|(tail, _)| (tail, Kind::LParen))
}

/// Parses a [`Kind::RParen`] from `input`.
fn right_paren(input: &str) -> LexResult<'_> {
    char(')').parse(input).map(|(tail, _)| (tail, Kind::RParen))
}
