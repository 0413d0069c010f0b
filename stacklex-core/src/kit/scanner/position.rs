//! 源代码位置追踪
//!
//! The scanner works on byte offsets; line/column are derived on demand for
//! diagnostics and token spans:
//! - line/column: human-readable error display (1-based, column counts chars)
//! - byte_offset: slicing the source buffer (0-based, UTF-8)

use serde::Serialize;
use std::fmt;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Locate `offset` inside `text`.
    ///
    /// An offset past the end is clamped to the end of the text.
    pub fn locate(text: &str, offset: usize) -> Self {
        let mut pos = Self::start();
        pos.advance_str(&text[..floor_char_boundary(text, offset)]);
        pos
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }

    /// Advance over every character of `s`.
    pub fn advance_str(&mut self, s: &str) {
        for c in s.chars() {
            self.advance(c);
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 源代码区间（Span），end 不包含
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 从起始位置创建区间（结束位置相同）
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// 合并两个位置为区间
    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
    }

    #[test]
    fn test_position_advance_newline() {
        let mut pos = SourcePosition::start();

        pos.advance('a');
        pos.advance('\n');

        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_position_advance_cjk() {
        let mut pos = SourcePosition::start();

        // 3字节UTF-8，一列
        pos.advance('中');
        assert_eq!(pos.column, 2);
        assert_eq!(pos.byte_offset, 3);
    }

    #[test]
    fn test_locate() {
        let text = "main:\nload 0xFF";
        let pos = SourcePosition::locate(text, 11);
        assert_eq!(pos, SourcePosition::new(2, 6, 11));
        assert_eq!(pos.to_string(), "2:6");
    }

    #[test]
    fn test_locate_clamps_to_text() {
        let pos = SourcePosition::locate("ab", 10);
        assert_eq!(pos.byte_offset, 2);
        assert_eq!(pos.column, 3);

        // 落在多字节字符中间时向前取整
        let pos = SourcePosition::locate("中", 1);
        assert_eq!(pos.byte_offset, 0);
    }

    #[test]
    fn test_span_len() {
        let start = SourcePosition::locate("abc", 1);
        let end = SourcePosition::locate("abc", 3);
        let span = SourceSpan::range(start, end);
        assert_eq!(span.len(), 2);
        assert!(SourceSpan::at(start).is_empty());
    }
}
