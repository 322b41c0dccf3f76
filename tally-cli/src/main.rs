//! Tally CLI - Command line interface
//!
//! Evaluates an input file one line at a time and prints `<line> = <result>`.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

mod config;
mod logging;
mod platform;

use crate::config::{read_config_file, InputSource, Overrides, Settings};
use crate::logging::LogFormat;
use crate::platform::print_line_error;
use tally_api::{init_config, run, TallyError};
use tally_config::{LogLevel, OverflowPolicy};

const TARGET: &str = "tally::cli";

/// Overflow policy as spelled on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OverflowArg {
    Error,
    Wrap,
    Saturate,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Error => OverflowPolicy::Error,
            OverflowArg::Wrap => OverflowPolicy::Wrap,
            OverflowArg::Saturate => OverflowPolicy::Saturate,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Evaluate integer arithmetic, one expression per line",
    version
)]
struct Cli {
    /// Input file, or `-` for stdin [default: test.in]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How integer overflow is handled
    #[arg(long, value_enum)]
    overflow: Option<OverflowArg>,

    /// Fail lines that have tokens after a complete expression
    #[arg(long)]
    strict: bool,

    /// Report failing lines and continue with the next one
    #[arg(long)]
    keep_going: bool,

    /// Maximum nesting of parentheses and unary signs
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            overflow: self.overflow.map(Into::into),
            strict: self.strict,
            keep_going: self.keep_going,
            max_depth: self.max_depth,
            log_level: self.log_level.map(Into::into),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Read config file
    let file = match &cli.config {
        Some(path) => match read_config_file(path) {
            Ok(file) => Some((path.as_path(), file)),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => None,
    };
    let settings = Settings::resolve(file, &cli.overrides());

    if let Err(e) = logging::init_with_file(&settings.log, cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    debug!(target: TARGET, ?settings, "Resolved settings");

    // Initialize API config (global singleton for convenience)
    if init_config(settings.run).is_err() {
        debug!(target: TARGET, "Global config was already initialized");
    }

    let input = match open_input(&settings.input) {
        Ok(input) => input,
        Err(e) => {
            error!(target: TARGET, error = %e, "Cannot open input");
            eprintln!("Error: Cannot read input '{}': {}", describe(&settings.input), e);
            process::exit(1);
        }
    };

    handle_run(input, &settings);
}

fn open_input(source: &InputSource) -> io::Result<Box<dyn BufRead>> {
    match source {
        InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}

fn describe(source: &InputSource) -> String {
    match source {
        InputSource::Stdin => "<stdin>".to_string(),
        InputSource::File(path) => path.display().to_string(),
    }
}

fn handle_run(input: Box<dyn BufRead>, settings: &Settings) {
    info!(target: TARGET, input = %describe(&settings.input), "Evaluating");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(input, &mut out, &settings.run) {
        Ok(summary) => {
            for failure in &summary.failures {
                print_line_error(failure);
            }
            if !summary.is_success() {
                eprintln!(
                    "{} of {} lines failed",
                    summary.failures.len(),
                    summary.lines
                );
                process::exit(1);
            }
        }
        Err(TallyError::Line(e)) => {
            print_line_error(&e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
