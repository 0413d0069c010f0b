//! Token 结构
//!
//! The engine does not know the grammar's token set; it only wraps whatever
//! kind an action produces with the span of the text it matched.

use super::position::SourceSpan;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<K> {
    pub kind: K,
    pub span: SourceSpan,
}

impl<K> Token<K> {
    pub fn new(kind: K, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Matched source text
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start.byte_offset..self.span.end.byte_offset]
    }

    /// 将 token 类型映射为另一种类型
    pub fn map_kind<U, F>(self, f: F) -> Token<U>
    where
        F: FnOnce(K) -> U,
    {
        Token {
            kind: f(self.kind),
            span: self.span,
        }
    }
}
