//! CLI 配置
//!
//! 包含 CLI 特有的配置：日志配置、配置文件，以及与命令行参数的合并

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tally_api::RunConfig;
use tally_config::{EvalConfig, FailurePolicy, LogLevel, OverflowPolicy, TrailingTokens};
use thiserror::Error;
use tracing::Level;

/// Input file used when neither the command line nor the config file names one
pub const DEFAULT_INPUT: &str = "test.in";

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub eval: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: to_level(LogLevel::default()),
            lexer: None,
            eval: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "tally::lexer" => self.lexer.unwrap_or(self.global),
            "tally::eval" => self.eval.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Per-phase log levels in the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogTargets {
    pub lexer: Option<LogLevel>,
    pub eval: Option<LogLevel>,
}

/// 配置文件结构（JSON）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// 输入文件路径（相对于配置文件所在目录）
    pub input: Option<PathBuf>,
    /// 求值配置，缺省字段使用默认值
    pub eval: Option<EvalConfig>,
    /// 失败策略: "abort" 或 "skip"
    pub on_failure: Option<FailurePolicy>,
    /// 日志级别: "error", "warn", "info", "debug", "trace"
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub log_targets: LogTargets,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse a JSON config file
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<ConfigFile, serde_json::Error> {
    serde_json::from_str(content)
}

/// Where lines are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }
}

/// Settings given on the command line; `None`/`false` means "not given"
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub overflow: Option<OverflowPolicy>,
    pub strict: bool,
    pub keep_going: bool,
    pub max_depth: Option<usize>,
    pub log_level: Option<LogLevel>,
}

/// Fully resolved CLI settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: InputSource,
    pub run: RunConfig,
    pub log: LogConfig,
}

impl Settings {
    /// Merge defaults, the config file (if any) and command-line overrides,
    /// in increasing order of precedence
    pub fn resolve(file: Option<(&Path, ConfigFile)>, overrides: &Overrides) -> Self {
        let (base_dir, file) = match file {
            Some((path, file)) => (path.parent().map(Path::to_path_buf), file),
            None => (None, ConfigFile::default()),
        };

        let input = match (&overrides.input, file.input) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => match base_dir {
                Some(dir) if path.as_os_str() != "-" => dir.join(path),
                _ => path,
            },
            (None, None) => PathBuf::from(DEFAULT_INPUT),
        };

        let mut eval = file.eval.unwrap_or_default();
        if let Some(overflow) = overrides.overflow {
            eval.overflow = overflow;
        }
        if overrides.strict {
            eval.trailing_tokens = TrailingTokens::Reject;
        }
        if let Some(max_depth) = overrides.max_depth {
            eval.max_depth = max_depth;
        }

        let on_failure = if overrides.keep_going {
            FailurePolicy::Skip
        } else {
            file.on_failure.unwrap_or_default()
        };

        let global = overrides.log_level.or(file.log_level).unwrap_or_default();
        let log = LogConfig {
            global: to_level(global),
            lexer: file.log_targets.lexer.map(to_level),
            eval: file.log_targets.eval.map(to_level),
        };

        Self {
            input: InputSource::from_path(input),
            run: RunConfig { eval, on_failure },
            log,
        }
    }
}
