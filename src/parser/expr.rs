//! The additive layer: `<expr>` and `<expr_prime>`.

use crate::{
    lexer::token::TokenType,
    trace::{Production, Sink},
};

use super::{Parser, Status};

impl<'src, S: Sink> Parser<'src, S> {
    /// `<expr> -> <term> <expr_prime>`, starting from [`Status::Clean`].
    pub fn expr(&mut self) -> Status {
        self.derive(Production::Expr, Status::Clean, |parser, status| {
            let status = parser.term(status);
            parser.expr_prime(status)
        })
    }

    /// Derives an `<expr>` inside an enclosing derivation that is at `outer`.
    ///
    /// The inner derivation echoes as if nothing had gone wrong yet, but an
    /// error on either side leaves the result [`Status::Errored`].
    pub(super) fn nested_expr(&mut self, outer: Status) -> Status {
        let inner = self.expr();
        outer.merge(inner)
    }

    /// `<expr_prime> -> (+|-) <term> <expr_prime> | ε`
    ///
    /// Chaining to the right here still reads `1 - 2 - 3` left to right.
    fn expr_prime(&mut self, status: Status) -> Status {
        self.derive(Production::ExprPrime, status, |parser, status| {
            match parser.current.ty() {
                TokenType::Addition | TokenType::Subtraction => {
                    parser.advance();
                    let status = parser.term(status);
                    parser.expr_prime(status)
                }
                _ => status,
            }
        })
    }
}
