//! 参考语法：一个简单的汇编方言
//!
//! Newlines, `->` arrows, hex/binary/decimal numbers, double-quoted strings,
//! `name:` labels, `@macro` references, and bare symbols. `;` starts a
//! comment that runs to the end of the line.

pub mod grammar;
pub mod token_kind;

pub use grammar::{build_grammar, grammar, tokenize, tokenize_with_config, STRING_STATE};
pub use token_kind::AsmTokenKind;
