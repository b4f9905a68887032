//! The multiplicative layer: `<term>` and `<term_prime>`.

use crate::{
    lexer::token::TokenType,
    trace::{Production, Sink},
};

use super::{Parser, Status};

impl<'src, S: Sink> Parser<'src, S> {
    /// `<term> -> <factor> <term_prime>`
    pub(super) fn term(&mut self, status: Status) -> Status {
        self.derive(Production::Term, status, |parser, status| {
            let status = parser.factor(status);
            parser.term_prime(status)
        })
    }

    /// `<term_prime> -> (*|/) <factor> <term_prime> | ε`
    fn term_prime(&mut self, status: Status) -> Status {
        self.derive(Production::TermPrime, status, |parser, status| {
            match parser.current.ty() {
                TokenType::Multiplication | TokenType::Division => {
                    parser.advance();
                    let status = parser.factor(status);
                    parser.term_prime(status)
                }
                _ => status,
            }
        })
    }
}
