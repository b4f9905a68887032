//! A predictive recursive-descent recognizer for integer arithmetic.
//!
//! # Grammar
//! The grammar is stratified by precedence, so that `*` and `/` bind tighter
//! than `+` and `-` without any explicit precedence bookkeeping, and is free of
//! left-recursion, so that one token of lookahead always decides which
//! alternative to take.
//!
//! ```raw
//! expr       ::= term expr_prime
//! expr_prime ::= ('+' | '-') term expr_prime | ε
//! term       ::= factor term_prime
//! term_prime ::= ('*' | '/') factor term_prime | ε
//! factor     ::= '(' expr ')' | '-' expr | number
//! number     ::= INT_LITERAL
//! ```
//!
//! Each production is one method, and the methods call each other exactly as
//! the grammar does. Stack depth therefore grows with the nesting depth of
//! parentheses and unary minus in the input; no limit is imposed.
//!
//! # Errors
//! A mismatch is reported to the [`Sink`] and recorded in the [`Status`]
//! threaded through the productions, and the offending token is consumed
//! anyway. Parsing always runs to the end of the source.

use thiserror::Error;

use crate::{
    lexer::{
        token::{Position, Token, TokenType},
        LexError, Lexer,
    },
    trace::{Diagnostic, Event, Production, Sink},
};

mod expr;
mod factor;
mod term;

/// The lookahead did not have the type the grammar required.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Syntax error on token {lexeme}, \"{expected}\" expected [{position}]")]
pub struct SyntaxError {
    /// The lexeme of the unexpected token.
    pub lexeme: String,
    /// The token type the grammar required.
    pub expected: TokenType,
    /// The position of the unexpected token.
    pub position: Position,
}

impl SyntaxError {
    /// Describes `token` appearing where `expected` was required.
    pub fn unexpected(token: &Token<'_>, expected: TokenType) -> Self {
        Self {
            lexeme: token.lexeme().to_owned(),
            expected,
            position: token.position(),
        }
    }
}

/// Whether a syntax error has been seen in the current expression.
///
/// Every [`Parser::expr`] starts over from [`Status::Clean`], including the
/// ones nested inside `( ... )` and after a unary `-`. A nested expression's
/// status is merged back into the enclosing one when it returns, so a
/// top-level expression ends [`Status::Errored`] if any part of it did.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No syntax error so far.
    #[default]
    Clean,
    /// At least one syntax error was reported.
    Errored,
}

impl Status {
    /// Returns `true` if no syntax error has been seen.
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }

    /// Returns `true` if a syntax error has been seen.
    pub fn is_errored(self) -> bool {
        self == Self::Errored
    }

    /// Returns [`Status::Errored`] if either `self` or `other` is.
    pub fn merge(self, other: Self) -> Self {
        if self.is_errored() {
            self
        } else {
            other
        }
    }
}

/// The outcome of [`Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// The final status of each top-level expression, in source order.
    statuses: Vec<Status>,
    /// Every character the lexer could not classify.
    lexical_errors: Vec<LexError>,
}

impl Summary {
    /// Returns the status of each top-level expression.
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Returns the lexical errors met while parsing.
    pub fn lexical_errors(&self) -> &[LexError] {
        &self.lexical_errors
    }

    /// Returns the number of top-level expressions derived.
    pub fn expressions(&self) -> usize {
        self.statuses.len()
    }

    /// Returns the number of top-level expressions containing a syntax error.
    pub fn rejected(&self) -> usize {
        self.statuses.iter().filter(|status| status.is_errored()).count()
    }

    /// Returns `true` if the source contained neither syntax nor lexical errors.
    pub fn is_accepted(&self) -> bool {
        self.rejected() == 0 && self.lexical_errors.is_empty()
    }
}

/// A recursive-descent parser with a single token of lookahead.
#[derive(Debug)]
pub struct Parser<'src, S> {
    /// The token source.
    lexer: Lexer<'src>,
    /// The lookahead.
    current: Token<'src>,
    /// Receives the trace and diagnostics.
    sink: S,
    /// Lexical errors not yet handed out in a [`Summary`].
    lexical_errors: Vec<LexError>,
}

impl<'src, S: Sink> Parser<'src, S> {
    /// Constructs a [`Parser`] and reads the first lookahead from `lexer`.
    pub fn new(mut lexer: Lexer<'src>, mut sink: S) -> Self {
        let mut lexical_errors = Vec::new();
        let current = Self::fetch(&mut lexer, &mut sink, &mut lexical_errors);

        Self {
            lexer,
            current,
            sink,
            lexical_errors,
        }
    }

    /// Derives top-level expressions until the lookahead is the end of the stream.
    ///
    /// Expressions need no separator: `1+1 2+2` is two expressions.
    pub fn parse(&mut self) -> Summary {
        let mut statuses = Vec::new();

        while !self.current.is(TokenType::EndOfStream) {
            let status = self.expr();
            tracing::debug!(expression = statuses.len() + 1, ?status, "derived expression");
            statuses.push(status);
        }

        Summary {
            statuses,
            lexical_errors: std::mem::take(&mut self.lexical_errors),
        }
    }

    /// Returns the lookahead.
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes `self` and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replaces the lookahead with the next token.
    fn advance(&mut self) {
        self.current = Self::fetch(&mut self.lexer, &mut self.sink, &mut self.lexical_errors);
    }

    /// Pulls the next token from `lexer`, reporting and skipping lexical errors.
    fn fetch(lexer: &mut Lexer<'src>, sink: &mut S, errors: &mut Vec<LexError>) -> Token<'src> {
        loop {
            match lexer.next_token() {
                Ok(token) => return token,
                Err(err) => {
                    tracing::debug!(%err, "skipping unclassified text");
                    sink.diagnose(&Diagnostic::Lexical(err.clone()));
                    errors.push(err);
                }
            }
        }
    }

    /// Runs `body` between the entry and exit trace lines of `production`.
    fn derive<F>(&mut self, production: Production, status: Status, body: F) -> Status
    where
        F: FnOnce(&mut Self, Status) -> Status,
    {
        self.sink.trace(Event::Enter(production));
        let status = body(self, status);
        self.sink.trace(Event::Exit(production));
        status
    }

    /// Echoes the lookahead to the trace, unless an error has been seen.
    fn echo(&mut self, status: Status) {
        if status.is_clean() {
            self.sink.trace(Event::Echo(&self.current));
        }
    }

    /// Reports that the lookahead is not `expected`.
    fn report(&mut self, expected: TokenType) -> Status {
        let error = SyntaxError::unexpected(&self.current, expected);
        self.sink.diagnose(&Diagnostic::Syntax(error));
        Status::Errored
    }
}
