//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use tally_config::{EvalConfig, FailurePolicy};

/// Run configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Per-line evaluation settings
    pub eval: EvalConfig,
    /// What happens after a line fails
    pub on_failure: FailurePolicy,
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration.
///
/// Returns the rejected config if one was already installed.
pub fn init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get the global config, falling back to defaults when uninitialized
pub fn config() -> RunConfig {
    GLOBAL_CONFIG.get().copied().unwrap_or_default()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
