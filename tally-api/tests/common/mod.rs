//! 测试辅助工具

#![allow(dead_code)]

use tally_api::{run, FailurePolicy, RunConfig, RunSummary, TallyError};

/// 运行输入文本，返回结果和写出的内容
pub fn run_text(input: &str, config: &RunConfig) -> (Result<RunSummary, TallyError>, String) {
    let mut out = Vec::new();
    let result = run(input.as_bytes(), &mut out, config);
    let out = String::from_utf8(out).expect("output is UTF-8");
    (result, out)
}

pub fn keep_going() -> RunConfig {
    RunConfig {
        on_failure: FailurePolicy::Skip,
        ..RunConfig::default()
    }
}
