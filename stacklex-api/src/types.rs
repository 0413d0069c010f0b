//! API 类型定义
//!
//! Tokenization input/output types.

use serde::Serialize;
use stacklex_core::asm::AsmTokenKind;
use stacklex_core::Token;

/// Tokenization output
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeOutput {
    /// Tokens in source order
    pub tokens: Vec<Token<AsmTokenKind>>,
    /// Bytes consumed
    pub position: usize,
    /// State active when the input ended
    pub final_state: String,
}

impl TokenizeOutput {
    /// Serializable view of every token
    pub fn reports(&self) -> Vec<TokenReport> {
        self.tokens.iter().map(TokenReport::from).collect()
    }
}

/// One token, flattened for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub kind: &'static str,
    /// Rendered as the driver prints it, e.g. `LABEL main:`
    pub text: String,
    pub token: AsmTokenKind,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub len: usize,
}

impl From<&Token<AsmTokenKind>> for TokenReport {
    fn from(token: &Token<AsmTokenKind>) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.kind.to_string(),
            token: token.kind.clone(),
            line: token.span.start.line,
            column: token.span.start.column,
            offset: token.span.start.byte_offset,
            len: token.span.len(),
        }
    }
}
