//! CLI 配置
//!
//! 日志级别：全局级别 + 按阶段覆盖

use stacklex_config::{LogLevel, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub scanner: Option<Level>,
    pub api: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl LogConfig {
    pub fn new(global: LogLevel) -> Self {
        Self {
            global: to_tracing_level(global),
            scanner: None,
            api: None,
        }
    }

    /// Per-phase overrides; `None` falls back to the global level.
    pub fn with_overrides(mut self, scanner: Option<LogLevel>, api: Option<LogLevel>) -> Self {
        self.scanner = scanner.map(to_tracing_level);
        self.api = api.map(to_tracing_level);
        self
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Scanner => self.scanner.unwrap_or(self.global),
            Phase::Api => self.api.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
