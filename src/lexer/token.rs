//! Tokens, their kinds, and the positions they are reported at.

use std::fmt::Display;

use nom::{combinator::all_consuming, Finish, Parser};
use num_bigint::BigUint;

use super::LexError;

/// The lexeme carried by every [`Kind::EndOfStream`] token.
pub const EOS_LEXEME: &str = "EOS";

/// A 1-based position in a source buffer.
///
/// Tokens are reported at their _trailing edge_: `col` points one column past
/// the last character of the lexeme. In `12+3` the literal `12` sits at
/// column 3 and the `+` at column 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The line number, starting at 1.
    pub row: usize,
    /// The column number, starting at 1 and counted in characters.
    pub col: usize,
}

impl Position {
    /// The position of the first character of a source.
    pub const START: Self = Self { row: 1, col: 1 };
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}, Col {}", self.row, self.col)
    }
}

/// The payload-free type of a [`Token`].
///
/// Diagnostics name the token type they expected with [`TokenType::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A run of decimal digits.
    IntLiteral,
    /// The end of the source.
    EndOfStream,
}

impl TokenType {
    /// Returns the upper-case name used for `self` in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "ADDITION",
            Self::Subtraction => "SUBTRACTION",
            Self::Multiplication => "MULTIPLICATION",
            Self::Division => "DIVISION",
            Self::LParen => "L_PAREN",
            Self::RParen => "R_PAREN",
            Self::IntLiteral => "INT_LITERAL",
            Self::EndOfStream => "EOS",
        }
    }

    /// Returns the fixed lexeme of `self`, or `None` for [`TokenType::IntLiteral`].
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Addition => Some("+"),
            Self::Subtraction => Some("-"),
            Self::Multiplication => Some("*"),
            Self::Division => Some("/"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::IntLiteral => None,
            Self::EndOfStream => Some(EOS_LEXEME),
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of a [`Token`], carrying the parsed value of integer literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A maximal run of decimal digits and its value.
    IntLiteral(BigUint),
    /// The end of the source; no further tokens follow.
    EndOfStream,
}

impl Kind {
    /// Returns the [`TokenType`] of `self`, discarding any payload.
    pub const fn ty(&self) -> TokenType {
        match self {
            Self::Addition => TokenType::Addition,
            Self::Subtraction => TokenType::Subtraction,
            Self::Multiplication => TokenType::Multiplication,
            Self::Division => TokenType::Division,
            Self::LParen => TokenType::LParen,
            Self::RParen => TokenType::RParen,
            Self::IntLiteral(_) => TokenType::IntLiteral,
            Self::EndOfStream => TokenType::EndOfStream,
        }
    }
}

/// A single lexical unit, borrowing its lexeme from the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What this token is.
    kind: Kind,
    /// The exact source text of this token.
    lexeme: &'src str,
    /// Where this token ends.
    position: Position,
}

sa::assert_impl_all!(Token<'static>: Send, Sync, Clone, Eq);

impl<'src> Token<'src> {
    /// Wraps an already classified `lexeme`.
    pub(super) fn new(kind: Kind, lexeme: &'src str, position: Position) -> Self {
        Self {
            kind,
            lexeme,
            position,
        }
    }

    /// Constructs a [`Kind::EndOfStream`] token at `position`.
    pub fn end_of_stream(position: Position) -> Self {
        Self::new(Kind::EndOfStream, EOS_LEXEME, position)
    }

    /// Classifies the whole of `lexeme` and wraps it in a [`Token`].
    ///
    /// Only a single operator or parenthesis, or a run of ASCII digits, is
    /// accepted. Anything else is a [`LexError::Unclassified`].
    pub fn classify(lexeme: &'src str, position: Position) -> Result<Self, LexError> {
        all_consuming(super::kind)
            .parse(lexeme)
            .finish()
            .map(|(_, kind)| Self::new(kind, lexeme, position))
            .map_err(|_| LexError::Unclassified {
                lexeme: lexeme.to_owned(),
                position,
            })
    }

    /// Returns the [`Kind`] of `self`.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns the [`TokenType`] of `self`.
    pub fn ty(&self) -> TokenType {
        self.kind.ty()
    }

    /// Returns `true` if `self` has the given type.
    pub fn is(&self, ty: TokenType) -> bool {
        self.ty() == ty
    }

    /// Returns the source text of `self`.
    pub fn lexeme(&self) -> &'src str {
        self.lexeme
    }

    /// Returns the (trailing-edge) position of `self`.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the value of an integer literal, or `None` for any other kind.
    pub fn value(&self) -> Option<&BigUint> {
        match &self.kind {
            Kind::IntLiteral(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} : {} || row={}, col={}",
            self.ty(),
            self.lexeme,
            self.position.row,
            self.position.col
        )
    }
}
