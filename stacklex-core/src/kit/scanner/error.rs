//! Scanner 错误类型
//!
//! Every failure is fatal to the run that produced it; the variants carry
//! enough context (position, active state, nearby text) to report a clean
//! diagnostic.

use super::position::SourcePosition;
use super::rule::StateId;
use serde::Serialize;

/// Errors produced while building rules or running a scanner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("[{position}] No rule in state '{state}' matched input \"{snippet}\"")]
    UnmatchedInput {
        position: SourcePosition,
        state: StateId,
        snippet: String,
    },

    #[error("[{position}] Unknown state '{state}'")]
    UnknownState {
        position: SourcePosition,
        state: StateId,
    },

    #[error("[{position}] Cannot pop state '{state}': it is the last state on the stack")]
    EmptyStack {
        position: SourcePosition,
        state: StateId,
    },

    #[error("[{position}] Cannot advance by {requested} bytes: only {remaining} remain")]
    OutOfRange {
        position: SourcePosition,
        requested: usize,
        remaining: usize,
    },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("[{position}] Pattern '{pattern}' in state '{state}' matched empty input without changing state")]
    EmptyMatch {
        position: SourcePosition,
        state: StateId,
        pattern: String,
    },

    #[error("[{position}] Pushing state '{state}' exceeds the maximum stack depth of {depth}")]
    StackOverflow {
        position: SourcePosition,
        state: StateId,
        depth: usize,
    },

    #[error("[{position}] Input ended inside state '{state}' (stack depth {depth})")]
    UnterminatedState {
        position: SourcePosition,
        state: StateId,
        depth: usize,
    },
}

/// 错误类型（不带上下文）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UnmatchedInput,
    UnknownState,
    EmptyStack,
    OutOfRange,
    InvalidPattern,
    EmptyMatch,
    StackOverflow,
    UnterminatedState,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::UnmatchedInput { .. } => ErrorKind::UnmatchedInput,
            ScanError::UnknownState { .. } => ErrorKind::UnknownState,
            ScanError::EmptyStack { .. } => ErrorKind::EmptyStack,
            ScanError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ScanError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            ScanError::EmptyMatch { .. } => ErrorKind::EmptyMatch,
            ScanError::StackOverflow { .. } => ErrorKind::StackOverflow,
            ScanError::UnterminatedState { .. } => ErrorKind::UnterminatedState,
        }
    }

    /// 错误发生的位置（模式编译错误没有位置）
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            ScanError::UnmatchedInput { position, .. }
            | ScanError::UnknownState { position, .. }
            | ScanError::EmptyStack { position, .. }
            | ScanError::OutOfRange { position, .. }
            | ScanError::EmptyMatch { position, .. }
            | ScanError::StackOverflow { position, .. }
            | ScanError::UnterminatedState { position, .. } => Some(*position),
            ScanError::InvalidPattern { .. } => None,
        }
    }

    /// State that was active (or requested) when the error occurred
    pub fn state(&self) -> Option<&str> {
        match self {
            ScanError::UnmatchedInput { state, .. }
            | ScanError::UnknownState { state, .. }
            | ScanError::EmptyStack { state, .. }
            | ScanError::EmptyMatch { state, .. }
            | ScanError::StackOverflow { state, .. }
            | ScanError::UnterminatedState { state, .. } => Some(state),
            ScanError::OutOfRange { .. } | ScanError::InvalidPattern { .. } => None,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> Option<usize> {
        self.position().map(|p| p.line)
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> Option<usize> {
        self.position().map(|p| p.column)
    }
}
