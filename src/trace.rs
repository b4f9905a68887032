//! Sinks for the parser's derivation trace and diagnostics.
//!
//! A [`Parser`](crate::parser::Parser) never writes to a concrete device. It
//! hands every [`Event`] and [`Diagnostic`] to the [`Sink`] it was built with,
//! which decides where the two streams end up.

use std::{
    fmt::Display,
    io::{self, Write},
};

use thiserror::Error;

use crate::{
    lexer::{
        token::{Kind, Token},
        LexError,
    },
    parser::SyntaxError,
};

/// A grammar production, as named in the derivation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    /// `<expr> -> <term> <expr_prime>`
    Expr,
    /// `<expr_prime> -> (+|-) <term> <expr_prime> | ε`
    ExprPrime,
    /// `<term> -> <factor> <term_prime>`
    Term,
    /// `<term_prime> -> (*|/) <factor> <term_prime> | ε`
    TermPrime,
    /// `<factor> -> ( <expr> ) | - <expr> | <number>`
    Factor,
    /// `<number> -> INT_LITERAL`
    Number,
}

impl Production {
    /// Returns the bare name of `self`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Expr => "expr",
            Self::ExprPrime => "expr_prime",
            Self::Term => "term",
            Self::TermPrime => "term_prime",
            Self::Factor => "factor",
            Self::Number => "number",
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

/// A single line of the derivation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A production was entered.
    Enter(Production),
    /// A production was left.
    Exit(Production),
    /// The parser echoes the current lookahead.
    Echo(&'a Token<'a>),
}

impl Display for Event<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Enter(production) => write!(f, "Enter {production}"),
            Event::Exit(production) => write!(f, "Exit {production}"),
            Event::Echo(token) => match token.kind() {
                Kind::IntLiteral(_) => write!(f, "Next token is: {}", token.lexeme()),
                _ => write!(f, "Next lexeme is: {}", token.lexeme()),
            },
        }
    }
}

/// A line of the diagnostic stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The lookahead did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The source contained text that is not a token.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

/// The destination of a parser's trace and diagnostic streams.
pub trait Sink {
    /// Receives one line of the derivation trace.
    fn trace(&mut self, event: Event<'_>);

    /// Receives one diagnostic.
    fn diagnose(&mut self, diagnostic: &Diagnostic);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn trace(&mut self, event: Event<'_>) {
        (**self).trace(event)
    }

    fn diagnose(&mut self, diagnostic: &Diagnostic) {
        (**self).diagnose(diagnostic)
    }
}

/// A [`Sink`] that keeps both streams in memory as rendered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    /// Rendered trace events, in order.
    trace: Vec<String>,
    /// Rendered diagnostics, in order.
    diagnostics: Vec<String>,
}

impl Recorder {
    /// Returns the recorded trace lines.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Returns the recorded diagnostic lines.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

impl Sink for Recorder {
    fn trace(&mut self, event: Event<'_>) {
        self.trace.push(event.to_string());
    }

    fn diagnose(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.to_string());
    }
}

/// A [`Sink`] writing the trace to one [`Write`] and diagnostics to another.
///
/// Write failures do not interrupt parsing; the first one is kept and
/// returned by [`WriterSink::finish`].
#[derive(Debug)]
pub struct WriterSink<T, D> {
    /// Receives the derivation trace.
    trace: T,
    /// Receives diagnostics.
    diagnostics: D,
    /// The first write failure, if any.
    error: Option<io::Error>,
}

impl<T: Write, D: Write> WriterSink<T, D> {
    /// Constructs a [`WriterSink`] over the given writers.
    pub fn new(trace: T, diagnostics: D) -> Self {
        Self {
            trace,
            diagnostics,
            error: None,
        }
    }

    /// Flushes both writers and returns the first error met while writing.
    pub fn finish(mut self) -> io::Result<()> {
        let flushed = self.trace.flush().and(self.diagnostics.flush());
        match self.error.take() {
            Some(err) => Err(err),
            None => flushed,
        }
    }

    /// Keeps `result` if it is the first failure.
    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<T: Write, D: Write> Sink for WriterSink<T, D> {
    fn trace(&mut self, event: Event<'_>) {
        let result = writeln!(self.trace, "{event}");
        self.record(result);
    }

    fn diagnose(&mut self, diagnostic: &Diagnostic) {
        let result = writeln!(self.diagnostics, "{diagnostic}");
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::token::Position;

    use super::*;

    #[test]
    fn event_display_is_correct() {
        assert_eq!(Event::Enter(Production::ExprPrime).to_string(), "Enter <expr_prime>");
        assert_eq!(Event::Exit(Production::Number).to_string(), "Exit <number>");

        let literal = Token::classify("42", Position { row: 1, col: 3 }).unwrap();
        assert_eq!(Event::Echo(&literal).to_string(), "Next token is: 42");

        let paren = Token::classify("(", Position::START).unwrap();
        assert_eq!(Event::Echo(&paren).to_string(), "Next lexeme is: (");

        let eos = Token::end_of_stream(Position::START);
        assert_eq!(Event::Echo(&eos).to_string(), "Next lexeme is: EOS");
    }

    #[test]
    fn writer_sink_splits_streams() {
        let mut trace = Vec::new();
        let mut diagnostics = Vec::new();

        let mut sink = WriterSink::new(&mut trace, &mut diagnostics);
        sink.trace(Event::Enter(Production::Factor));
        sink.diagnose(&Diagnostic::Lexical(LexError::Unclassified {
            lexeme: "#".to_owned(),
            position: Position { row: 3, col: 2 },
        }));
        sink.trace(Event::Exit(Production::Factor));
        sink.finish().unwrap();

        assert_eq!(
            String::from_utf8(trace).unwrap(),
            "Enter <factor>\nExit <factor>\n"
        );
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "Invalid string, cannot parse \"#\" to single token [Line 3, Col 2]\n"
        );
    }

    #[test]
    fn writer_sink_reports_first_failure() {
        /// A writer that always fails.
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Broken, io::sink());
        sink.trace(Event::Enter(Production::Expr));
        sink.trace(Event::Exit(Production::Expr));

        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
