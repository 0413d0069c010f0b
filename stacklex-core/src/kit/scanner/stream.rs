//! 输入流抽象
//!
//! An immutable text buffer paired with a cursor. The buffer is shared
//! (`Arc<str>`), so producing the advanced stream after a match is cheap and
//! never copies the input.

use std::sync::Arc;

use super::error::ScanError;
use super::position::SourcePosition;

/// 输入流
#[derive(Debug, Clone)]
pub struct Stream {
    text: Arc<str>,
    /// Byte offset of the cursor
    position: usize,
    /// Line/column of the cursor, kept in step with `position`
    location: SourcePosition,
}

impl Stream {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            position: 0,
            location: SourcePosition::start(),
        }
    }

    /// 整个输入
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 当前字节偏移
    pub fn position(&self) -> usize {
        self.position
    }

    /// 当前行列位置
    pub fn location(&self) -> SourcePosition {
        self.location
    }

    /// Total input length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 尚未匹配的剩余输入
    pub fn remainder(&self) -> &str {
        &self.text[self.position..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.position == self.text.len()
    }

    /// Return a stream whose cursor is `n` bytes further along.
    ///
    /// `n` must stay inside the remainder and land on a character boundary.
    pub fn advance(&self, n: usize) -> Result<Stream, ScanError> {
        let remainder = self.remainder();
        if n > remainder.len() || !remainder.is_char_boundary(n) {
            return Err(ScanError::OutOfRange {
                position: self.location,
                requested: n,
                remaining: remainder.len(),
            });
        }

        let mut location = self.location;
        location.advance_str(&remainder[..n]);
        Ok(Stream {
            text: Arc::clone(&self.text),
            position: self.position + n,
            location,
        })
    }

    /// 剩余输入的预览（最多 `max_chars` 个字符）
    pub fn snippet(&self, max_chars: usize) -> &str {
        let remainder = self.remainder();
        match remainder.char_indices().nth(max_chars) {
            Some((end, _)) => &remainder[..end],
            None => remainder,
        }
    }
}
