//! API 类型定义
//!
//! 运行的输出类型。

use crate::error::LineError;

/// Outcome of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read
    pub lines: usize,
    /// Lines that produced a value
    pub evaluated: usize,
    /// Failed lines, in input order; only ever non-empty under `FailurePolicy::Skip`
    pub failures: Vec<LineError>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
