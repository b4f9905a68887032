//! A tracing recursive-descent recognizer for integer arithmetic expressions.
//!
//! Source text is split into lines and scanned by a [`Lexer`], whose tokens
//! are pulled one at a time by a [`Parser`]. The parser accepts or rejects the
//! input against a classical `expr`/`term`/`factor` grammar; it computes no
//! values and builds no tree. What it does produce is a trace of every
//! production it enters and leaves, and a diagnostic for every token that did
//! not fit, both handed to a [`Sink`].
//!
//! ```
//! use descent::{recognize, Recorder};
//!
//! let mut recorder = Recorder::default();
//! let summary = recognize("(1 + 2) * 3", &mut recorder);
//!
//! assert!(summary.is_accepted());
//! assert_eq!(recorder.trace().first().map(String::as_str), Some("Enter <expr>"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

extern crate static_assertions as sa;

pub mod cli;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod trace;

pub use lexer::{
    token::{Kind, Position, Token, TokenType},
    LexError, Lexer,
};
pub use parser::{Parser, Status, Summary, SyntaxError};
pub use trace::{Diagnostic, Event, Production, Recorder, Sink, WriterSink};

/// Parses every expression in `source`, reporting to `sink`.
pub fn recognize<S: Sink>(source: &str, sink: S) -> Summary {
    Parser::new(Lexer::from(source), sink).parse()
}
