//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示：失败的行和指向出错列的标记。

use tally_api::LineError;

/// 渲染错误并显示出错行
///
/// ```text
/// error: unexpected character '#' at column 2
///  --> line 3
///   |
/// 3 | 2#3
///   |  ^
/// ```
pub fn render_line_error(e: &LineError) -> String {
    let line_str = e.line_number.to_string();
    let gutter = " ".repeat(line_str.len());

    let mut out = format!("error: {}\n", e.error);
    out.push_str(&format!("{gutter}--> line {}\n", e.line_number));
    out.push_str(&format!("{gutter} |\n"));
    out.push_str(&format!("{line_str} | {}\n", e.text));

    // 没有列号时（输入提前结束）标记放在行尾
    let marker_offset = match e.column() {
        Some(col) => col.saturating_sub(1),
        None => e.text.chars().count(),
    };
    out.push_str(&format!("{gutter} | {}^\n", marker_offset_padding(&e.text, marker_offset)));
    out
}

/// 打印错误并显示出错行
pub fn print_line_error(e: &LineError) {
    eprint!("{}", render_line_error(e));
}

/// Padding that lines a caret up under character `offset` of `text`; tabs
/// are kept so the caret stays aligned
fn marker_offset_padding(text: &str, offset: usize) -> String {
    text.chars()
        .chain(std::iter::repeat(' '))
        .take(offset)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_api::{evaluate_line, EvalError, RunConfig};

    fn line_error(line: &str, line_number: usize) -> LineError {
        let error = match evaluate_line(line, &RunConfig::default()) {
            Err(e) => e,
            Ok(v) => panic!("{line:?} evaluated to {v}"),
        };
        LineError::new(line_number, line, error)
    }

    #[test]
    fn test_caret_under_column() {
        let rendered = render_line_error(&line_error("2#3", 3));
        assert_eq!(
            rendered,
            "error: unexpected character '#' at column 2\n --> line 3\n  |\n3 | 2#3\n  |  ^\n"
        );
    }

    #[test]
    fn test_caret_at_end_of_input() {
        let rendered = render_line_error(&line_error("(2+3", 12));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "12 | (2+3");
        assert_eq!(lines[4], "   |     ^");
    }

    #[test]
    fn test_tabs_keep_caret_aligned() {
        assert_eq!(marker_offset_padding("\t1 $", 3), "\t  ");
    }

    #[test]
    fn test_error_kinds_render() {
        let e = line_error("8/0", 1);
        assert!(matches!(e.error, EvalError::DivisionByZero { .. }));
        assert!(render_line_error(&e).ends_with("  |  ^\n"));
    }
}
