//! Stacklex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Stacklex crates.

use serde::Deserialize;

/// Name of the state every scan starts in
pub const DEFAULT_START_STATE: &str = "root";

/// Number of characters shown from the unmatched remainder in diagnostics
pub const DEFAULT_SNIPPET_LEN: usize = 20;

/// Upper bound on nested states before a run is aborted
pub const DEFAULT_MAX_STACK_DEPTH: usize = 64;

/// Configuration for a single scanner run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// State pushed onto the empty stack before the first match
    pub start_state: String,
    /// Length (in characters) of the remainder preview attached to errors
    pub snippet_len: usize,
    /// Maximum state stack depth
    pub max_stack_depth: usize,
    /// Fail when input ends while a pushed state is still active
    pub require_start_state_at_end: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            start_state: DEFAULT_START_STATE.to_string(),
            snippet_len: DEFAULT_SNIPPET_LEN,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            require_start_state_at_end: false,
        }
    }
}

/// Log verbosity, independent of any logging backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. "silent" maps to `Error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" | "silent" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

/// How tokens are written by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// A JSON array of token reports
    Json,
}

/// Execution phase, used to route log output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Api,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("stacklex::{}", self.as_str())
    }
}

/// Project-level configuration file, as loaded by the driver
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StacklexConfig {
    pub scanner: ScannerConfig,
    pub log_level: Option<LogLevel>,
    /// Overrides `log_level` for `stacklex::scanner`
    pub scanner_log_level: Option<LogLevel>,
    /// Overrides `log_level` for `stacklex::api`
    pub api_log_level: Option<LogLevel>,
    pub format: OutputFormat,
    pub show_source: bool,
}
