//! Lexer error types
//!
//! Structured lexical errors: what went wrong and where.

use super::position::SourcePosition;

/// Kind of lexical error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// Character outside digits, whitespace, operators, parentheses and comments
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// Integer literal too large under `OverflowPolicy::Error`
    #[error("integer literal {0} does not fit in 64 bits")]
    LiteralOverflow(String),
}

/// Lexical error with the position of the offending input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {}", .position.column())]
pub struct LexerError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
}

impl LexerError {
    /// Create an error at the given position
    pub fn at(kind: LexErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// 0-based character index
    pub fn index(&self) -> usize {
        self.position.index
    }
}
