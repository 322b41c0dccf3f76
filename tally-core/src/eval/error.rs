use crate::arith::Operation;
use crate::lexer::{LexErrorKind, LexerError, SourcePosition, Token};
use std::fmt;
use tally_config::Phase;

/// What the evaluator saw where it needed something else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput,
}

impl Found {
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Found::Token(token) => Some(token.position),
            Found::EndOfInput => None,
        }
    }
}

impl From<Option<Token>> for Found {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Found::EndOfInput, Found::Token)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => {
                write!(f, "'{}' at column {}", token.kind, token.position.column())
            }
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Evaluation error; the first one aborts the line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("expected closing parenthesis ')', found {found}")]
    ExpectedClosingParenthesis { found: Found },

    #[error("expected a value, parenthesis, or sign, found {found}")]
    ExpectedFactor { found: Found },

    /// `position` is that of the `/` operator
    #[error("division by zero at column {}", .position.column())]
    DivisionByZero { position: SourcePosition },

    #[error("integer overflow in {operation} at column {}", .position.column())]
    Overflow {
        operation: Operation,
        position: SourcePosition,
    },

    #[error("unexpected trailing token '{}' at column {}", .token.kind, .token.position.column())]
    UnexpectedTrailingToken { token: Token },

    #[error("nesting deeper than {limit} levels at column {}", .position.column())]
    NestingTooDeep {
        limit: usize,
        position: SourcePosition,
    },
}

/// Evaluation result type
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Position of the offending input, if there is one
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            EvalError::Lexer(e) => Some(e.position),
            EvalError::ExpectedClosingParenthesis { found }
            | EvalError::ExpectedFactor { found } => found.position(),
            EvalError::DivisionByZero { position }
            | EvalError::Overflow { position, .. }
            | EvalError::NestingTooDeep { position, .. } => Some(*position),
            EvalError::UnexpectedTrailingToken { token } => Some(token.position),
        }
    }

    /// Stable name of the error kind, for programmatic handling
    pub fn kind_name(&self) -> &'static str {
        match self {
            EvalError::Lexer(e) => match e.kind {
                LexErrorKind::UnexpectedCharacter(_) => "UnexpectedCharacter",
                LexErrorKind::LiteralOverflow(_) => "LiteralOverflow",
            },
            EvalError::ExpectedClosingParenthesis { .. } => "ExpectedClosingParenthesis",
            EvalError::ExpectedFactor { .. } => "ExpectedFactor",
            EvalError::DivisionByZero { .. } => "DivisionByZero",
            EvalError::Overflow { .. } => "Overflow",
            EvalError::UnexpectedTrailingToken { .. } => "UnexpectedTrailingToken",
            EvalError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Phase that raised the error
    pub fn phase(&self) -> Phase {
        match self {
            EvalError::Lexer(_) => Phase::Lexer,
            _ => Phase::Eval,
        }
    }
}
