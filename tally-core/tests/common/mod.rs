//! 测试辅助工具
//!
//! 提供逐行求值测试的辅助函数

#![allow(dead_code)]

use tally_core::{evaluate_with_config, EvalConfig, EvalError, OverflowPolicy, TrailingTokens};

/// 使用默认配置求值一行
pub fn eval(line: &str) -> Result<i64, EvalError> {
    tally_core::evaluate(line)
}

/// 求值并断言成功
pub fn eval_ok(line: &str) -> i64 {
    match eval(line) {
        Ok(value) => value,
        Err(e) => panic!("evaluating {line:?} failed: {e}"),
    }
}

/// 求值并断言失败
pub fn eval_err(line: &str) -> EvalError {
    match eval(line) {
        Ok(value) => panic!("evaluating {line:?} unexpectedly produced {value}"),
        Err(e) => e,
    }
}

/// 拒绝多余 token 的配置
pub fn strict() -> EvalConfig {
    EvalConfig {
        trailing_tokens: TrailingTokens::Reject,
        ..EvalConfig::default()
    }
}

/// 指定溢出策略的配置
pub fn with_overflow(overflow: OverflowPolicy) -> EvalConfig {
    EvalConfig {
        overflow,
        ..EvalConfig::default()
    }
}

pub fn eval_with(line: &str, config: &EvalConfig) -> Result<i64, EvalError> {
    evaluate_with_config(line, config)
}
