//! 平台相关输出

pub mod cli;

pub use cli::{print_line_error, render_line_error};
