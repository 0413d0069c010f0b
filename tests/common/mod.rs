//! 测试辅助工具

#![allow(dead_code)]

use stacklex::{asm, AsmTokenKind, ScanError};

/// Tokenize with the reference grammar and keep only the token kinds
pub fn lex(source: &str) -> Result<Vec<AsmTokenKind>, ScanError> {
    asm::tokenize(source).map(|output| output.into_kinds())
}

pub fn symbol(name: &str) -> AsmTokenKind {
    AsmTokenKind::Symbol(name.to_string())
}
