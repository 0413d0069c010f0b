//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use stacklex_api::StacklexError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &StacklexError, source: &str) {
    eprintln!("error: {}", e);

    if let (Some(line), Some(col)) = (e.line(), e.column()) {
        if let Some(context) = render_source_context(source, line, col) {
            eprint!("{}", context);
        }
    }
}

/// Render the lines around `error_line` with a caret under `error_col`.
///
/// Returns `None` when the line is outside the source. An error at the very
/// end of a newline-terminated source points one past the last line, which
/// is rendered as an empty line.
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    let mut lines: Vec<&str> = source.lines().collect();
    if source.is_empty() || source.ends_with('\n') {
        lines.push("");
    }

    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(lines.len());
    let width = end_line.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{}|--\n", "-".repeat(width + 1)));
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{:>width$} | {}\n", line_idx, lines[line_idx - 1]));
        if line_idx == error_line {
            out.push_str(&format!(
                "{} | {}^\n",
                " ".repeat(width),
                " ".repeat(error_col.saturating_sub(1))
            ));
        }
    }
    out.push_str(&format!("{}|--\n", "-".repeat(width + 1)));
    Some(out)
}
