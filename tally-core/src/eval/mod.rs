//! Evaluator module
//!
//! Recursive-descent evaluation of one line, with precedence climbing
//! expressed as one function per grammar rule.

mod error;
mod evaluator;

pub use error::{EvalError, EvalResult, Found};
pub use evaluator::Evaluator;
