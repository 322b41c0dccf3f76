//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use tally_core::EvalError;
use thiserror::Error;

/// A line that failed to evaluate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {error}")]
pub struct LineError {
    /// 1-based line number
    pub line_number: usize,
    /// Line text without its terminator
    pub text: String,
    #[source]
    pub error: EvalError,
}

/// Tally 错误类型
#[derive(Error, Debug)]
pub enum TallyError {
    /// 求值错误
    #[error(transparent)]
    Line(#[from] LineError),

    /// 读写错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineError {
    pub fn new(line_number: usize, text: impl Into<String>, error: EvalError) -> Self {
        Self {
            line_number,
            text: text.into(),
            error,
        }
    }

    /// 1-based column of the offending input, if there is one
    pub fn column(&self) -> Option<usize> {
        self.error.position().map(|p| p.column())
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.error.phase().as_str(),
            line: self.line_number,
            column: self.column(),
            error_kind: self.error.kind_name(),
            message: self.error.to_string(),
        }
    }
}

impl TallyError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            TallyError::Line(e) => e.error.phase().as_str(),
            TallyError::Io(_) => "io",
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer, eval
    pub phase: &'static str,
    /// 错误行号（1-based）
    pub line: usize,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(col) => write!(
                f,
                "[{}:{}] {} error: {}",
                self.line, col, self.phase, self.message
            ),
            None => write!(f, "[{}] {} error: {}", self.line, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
