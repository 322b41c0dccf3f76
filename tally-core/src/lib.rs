//! Tally Core - integer expression evaluation (pure logic, no IO)
//!
//! Contains the lexer and the recursive-descent evaluator.
//! Only operates on a single in-memory line, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//!
//! ```text
//! Expr   := Term (('+' | '-') Term)*
//! Term   := Factor (('*' | '/') Factor)*
//! Factor := INTEGER | '(' Expr ')' | ('+' | '-') Factor
//! ```

pub mod arith;
pub mod eval;
pub mod lexer;

// Re-export common types
pub use arith::Operation;
pub use eval::{EvalError, EvalResult, Evaluator, Found};
pub use lexer::{LexErrorKind, Lexer, LexerError, SourcePosition, Symbol, Token, TokenKind};

// Re-export config types from tally-config
pub use tally_config::{EvalConfig, OverflowPolicy, Phase, TrailingTokens};

/// Evaluate one line with the default configuration
pub fn evaluate(line: &str) -> EvalResult<i64> {
    Evaluator::new(line).evaluate()
}

/// Evaluate one line with an explicit configuration
pub fn evaluate_with_config(line: &str, config: &EvalConfig) -> EvalResult<i64> {
    Evaluator::with_config(line, config).evaluate()
}
