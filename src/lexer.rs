//! A line-aware lexer for integer arithmetic.
//!
//! The [`Lexer`] walks a buffer of lines one character at a time, producing
//! one [`Token`] per call. Line breaks are invisible separators: they never
//! produce a token, and a digit run never spans two lines. Once the buffer is
//! exhausted every further call yields the same [`Kind::EndOfStream`] token.

use nom::{branch::alt, error::VerboseError, IResult, Parser};
use thiserror::Error;

use token::{Kind, Position, Token};

pub mod int;
pub mod symbol;
pub mod token;

/// The general return type for [`crate::lexer`] parsers.
pub type LexResult<'src> = IResult<&'src str, Kind, VerboseError<&'src str>>;

/// The error type produced when source text does not form a token.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    /// The lexeme matches no token kind.
    #[error("Invalid string, cannot parse \"{lexeme}\" to single token [{position}]")]
    Unclassified {
        /// The offending source text.
        lexeme: String,
        /// The trailing-edge position of `lexeme`.
        position: Position,
    },
}

impl LexError {
    /// Returns the position this error was raised at.
    pub fn position(&self) -> Position {
        match self {
            Self::Unclassified { position, .. } => *position,
        }
    }
}

/// Parses the [`Kind`] of the token at the start of `input`.
pub fn kind(input: &str) -> LexResult<'_> {
    alt((int::int, symbol::glyph)).parse(input)
}

/// The scan position inside a [`Lexer`]'s buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor {
    /// Index of the current line.
    row: usize,
    /// Byte offset into the current line.
    offset: usize,
    /// Characters before `offset` on the current line.
    col: usize,
}

impl Cursor {
    /// Moves past `text`, which must not contain a line break.
    fn skip(&mut self, text: &str) {
        self.offset += text.len();
        self.col += text.chars().count();
    }
}

/// Produces [`Token`]s on demand from an ordered buffer of lines.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// The source buffer, one entry per line.
    lines: Vec<&'src str>,
    /// The next unscanned character.
    cursor: Cursor,
    /// Set once the [`Iterator`] impl has yielded [`Kind::EndOfStream`].
    exhausted: bool,
}

impl<'src> From<&'src str> for Lexer<'src> {
    fn from(value: &'src str) -> Self {
        Self::new(value.lines())
    }
}

impl<'src> Lexer<'src> {
    /// Constructs a [`Lexer`] over the given `lines`.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'src str>,
    {
        Self {
            lines: lines.into_iter().collect(),
            cursor: Cursor::default(),
            exhausted: false,
        }
    }

    /// Scans and returns the next token, advancing past it.
    ///
    /// An unrecognized character produces a [`LexError`]; the cursor still moves
    /// past it, so the following call resumes after the offending character.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        loop {
            let Some(line) = self.lines.get(self.cursor.row).copied() else {
                return Ok(Token::end_of_stream(self.here()));
            };

            let rest = &line[self.cursor.offset..];
            let Some(head) = rest.chars().next() else {
                if self.cursor.row + 1 >= self.lines.len() {
                    return Ok(Token::end_of_stream(self.here()));
                }

                self.cursor = Cursor {
                    row: self.cursor.row + 1,
                    ..Cursor::default()
                };
                continue;
            };

            let glyph = &rest[..head.len_utf8()];
            if head.is_whitespace() {
                self.cursor.skip(glyph);
                continue;
            }

            return match kind(rest) {
                Ok((tail, kind)) => {
                    let lexeme = &rest[..rest.len() - tail.len()];
                    self.cursor.skip(lexeme);
                    let token = Token::new(kind, lexeme, self.here());
                    tracing::trace!(%token, "scanned token");
                    Ok(token)
                }
                Err(_) => {
                    self.cursor.skip(glyph);
                    let err = LexError::Unclassified {
                        lexeme: glyph.to_owned(),
                        position: self.here(),
                    };
                    tracing::trace!(%err, "rejected character");
                    Err(err)
                }
            };
        }
    }

    /// Returns what [`Lexer::next_token`] would return, without advancing.
    pub fn peek(&mut self) -> Result<Token<'src>, LexError> {
        let saved = self.cursor;
        let token = self.next_token();
        self.cursor = saved;
        token
    }

    /// Returns the 1-based position of the cursor.
    fn here(&self) -> Position {
        Position {
            row: self.cursor.row + 1,
            col: self.cursor.col + 1,
        }
    }
}

/// Yields every token up to and including the first [`Kind::EndOfStream`].
impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let result = self.next_token();
        if matches!(&result, Ok(token) if token.kind() == &Kind::EndOfStream) {
            self.exhausted = true;
        }
        Some(result)
    }
}
