//! Tally API - Execution orchestration layer
//!
//! Provides unified execution interface, including:
//! - Line-by-line run driver over any `BufRead`
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (TallyError) and structured reports
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(input, output, &config)` API.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from tally_config
pub use tally_config::{EvalConfig, FailurePolicy, LogLevel, OverflowPolicy, TrailingTokens};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorReport, LineError, TallyError};
pub use types::RunSummary;

// Re-export core types
pub use tally_config;
pub use tally_core::{EvalError, Phase, SourcePosition};

const TARGET: &str = "tally::api";

/// Evaluate a single line with explicit configuration
pub fn evaluate_line(text: &str, config: &RunConfig) -> Result<i64, EvalError> {
    tally_core::evaluate_with_config(text, &config.eval)
}

/// Evaluate every line of `input`, writing `<line> = <result>` to `output`.
///
/// Under `FailurePolicy::Abort` the first failing line ends the run; results
/// of earlier lines have already been written. Under `FailurePolicy::Skip`
/// failures are collected in the returned summary and the run continues.
pub fn run<R, W>(input: R, output: &mut W, config: &RunConfig) -> Result<RunSummary, TallyError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    info!(target: TARGET, on_failure = ?config.on_failure, "Starting run");

    let mut summary = RunSummary::default();
    for (index, line) in input.lines().enumerate() {
        let text = line?;
        let line_number = index + 1;
        summary.lines += 1;

        match evaluate_line(&text, config) {
            Ok(value) => {
                writeln!(output, "{text} = {value}")?;
                summary.evaluated += 1;
            }
            Err(error) => {
                let failure = LineError::new(line_number, text, error);
                match config.on_failure {
                    FailurePolicy::Abort => {
                        output.flush()?;
                        debug!(target: TARGET, line = line_number, "Aborting run");
                        return Err(failure.into());
                    }
                    FailurePolicy::Skip => {
                        warn!(target: TARGET, line = line_number, error = %failure.error, "Skipping line");
                        summary.failures.push(failure);
                    }
                }
            }
        }
    }
    output.flush()?;

    info!(
        target: TARGET,
        lines = summary.lines,
        failed = summary.failures.len(),
        "Run completed"
    );
    Ok(summary)
}

// ==================== Convenience API (using global config) ====================

/// Evaluate a line using the global config
pub fn eval(text: &str) -> Result<i64, EvalError> {
    evaluate_line(text, &get_config())
}

/// Quick evaluation with default config (auto-initializes if needed)
pub fn quick_eval(text: &str) -> Result<i64, EvalError> {
    if !is_initialized() {
        // Losing the race to another initializer is fine
        let _ = init_config(RunConfig::default());
    }
    eval(text)
}
