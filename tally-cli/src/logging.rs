//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。
//! 日志写入 stderr，stdout 只输出求值结果。

use crate::config::LogConfig;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

const PHASE_TARGETS: &[&str] = &["tally::lexer", "tally::eval"];

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file '{}': {source}", .path.display())]
    LogFile {
        path: std::path::PathBuf,
        source: io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the per-phase target filter
pub fn targets(log_config: &LogConfig) -> Targets {
    PHASE_TARGETS.iter().fold(
        Targets::new().with_default(log_config.global),
        |targets, target| targets.with_target(*target, log_config.level_for(target)),
    )
}

/// 使用指定格式和日志配置初始化日志系统
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), LoggingError> {
    let targets = targets(log_config);

    let mut layers = vec![format_layer(format, io::stderr)
        .with_filter(targets.clone())
        .boxed()];

    // If file specified, output to both stderr and file
    if let Some(path) = file {
        let file_handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets)
            .boxed();
        layers.push(file_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Create formatter layer based on format
fn format_layer<S, W>(format: LogFormat, make_writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
