//! The leaves of the grammar: `<factor>` and `<number>`.
//!
//! Both productions check the lookahead, and both consume a token even when
//! the check fails, so that parsing keeps moving forward.

use crate::{
    lexer::token::TokenType,
    trace::{Production, Sink},
};

use super::{Parser, Status};

impl<'src, S: Sink> Parser<'src, S> {
    /// `<factor> -> ( <expr> ) | - <expr> | <number>`
    pub(super) fn factor(&mut self, status: Status) -> Status {
        self.derive(Production::Factor, status, |parser, status| {
            match parser.current.ty() {
                TokenType::LParen => {
                    parser.echo(status);
                    parser.advance();

                    let mut status = parser.nested_expr(status);
                    if !parser.current.is(TokenType::RParen) {
                        status = parser.report(TokenType::RParen);
                    }

                    // the closing paren is assumed even when missing
                    parser.advance();
                    status
                }
                TokenType::Subtraction => {
                    parser.advance();
                    parser.nested_expr(status)
                }
                _ => parser.number(status),
            }
        })
    }

    /// `<number> -> INT_LITERAL`
    fn number(&mut self, status: Status) -> Status {
        self.derive(Production::Number, status, |parser, mut status| {
            if !parser.current.is(TokenType::IntLiteral) {
                status = parser.report(TokenType::IntLiteral);
            }

            parser.echo(status);
            parser.advance();
            parser.echo(status);
            status
        })
    }
}
