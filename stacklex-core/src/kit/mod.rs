//! 通用工具
//!
//! Grammar-agnostic building blocks; nothing in here knows about a
//! particular language.

pub mod scanner;
