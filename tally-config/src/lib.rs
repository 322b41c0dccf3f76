//! Tally Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Tally crates.

use serde::{Deserialize, Serialize};

/// How integer overflow is handled while evaluating a line.
///
/// Applies to literal accumulation, the four binary operators and unary
/// negation. All values are `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the line with an overflow error
    #[default]
    Error,
    /// Two's-complement wraparound
    Wrap,
    /// Clamp to `i64::MIN..=i64::MAX`
    Saturate,
}

/// What to do with tokens left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingTokens {
    /// Stop at the end of the expression; `2+3)` evaluates to 5
    #[default]
    Ignore,
    /// Fail the line if anything follows the expression
    Reject,
}

/// What the run driver does when a line fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The first failing line ends the run
    #[default]
    Abort,
    /// Report the failing line and move on to the next one
    Skip,
}

/// Configuration for evaluating a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub overflow: OverflowPolicy,
    pub trailing_tokens: TrailingTokens,
    /// Maximum nesting of factors (parentheses and unary signs)
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            trailing_tokens: TrailingTokens::default(),
            max_depth: 256,
        }
    }
}

/// Log verbosity, as written in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Evaluation phase, used to pick a log target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Eval,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Eval => "eval",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("tally::{}", self.as_str())
    }
}
