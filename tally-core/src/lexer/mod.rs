//! Lexer for a single expression line
//!
//! Tokens are produced on demand: the evaluator pulls one token at a time and
//! the lexer never looks back at consumed characters.

pub mod error;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod position;
pub mod token;

pub use error::{LexErrorKind, LexerError};
pub use lexer::Lexer;
pub use position::SourcePosition;
pub use token::{Symbol, Token, TokenKind, ADDITIVE, MULTIPLICATIVE, SYMBOL_TABLE};
