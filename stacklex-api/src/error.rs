//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

pub use stacklex_core::kit::scanner::{ErrorKind as ScanErrorKind, ScanError};

/// Stacklex 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StacklexError {
    /// 扫描错误（结构化）
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// 读取源文件失败
    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

impl StacklexError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            StacklexError::Scan(e) => e.line(),
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            StacklexError::Scan(e) => e.column(),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            StacklexError::Scan(_) => "scanner",
            StacklexError::Io { .. } => "io",
            StacklexError::Config(_) => "config",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            StacklexError::Scan(e) => ErrorReport {
                phase: self.phase(),
                line: e.line(),
                column: e.column(),
                error_kind: format!("{:?}", e.kind()),
                message: e.to_string(),
                state: e.state().map(str::to_string),
            },
            StacklexError::Io { .. } => ErrorReport {
                phase: self.phase(),
                line: None,
                column: None,
                error_kind: "IoError".to_string(),
                message: self.to_string(),
                state: None,
            },
            StacklexError::Config(_) => ErrorReport {
                phase: self.phase(),
                line: None,
                column: None,
                error_kind: "ConfigError".to_string(),
                message: self.to_string(),
                state: None,
            },
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: scanner, io, config
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// 出错时的扫描状态
    pub state: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.phase, self.message)
    }
}
