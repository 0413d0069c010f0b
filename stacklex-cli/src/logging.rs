//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 只输出 token。

use std::io;

use stacklex_config::Phase;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// Per-phase filter built from the CLI log configuration
pub fn targets(log_config: &LogConfig) -> Targets {
    [Phase::Scanner, Phase::Api, Phase::Cli]
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase))
        })
}

/// 初始化日志系统
///
/// `RUST_LOG`, when set, replaces the configured filter.
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let layer = create_format_layer(format);
    let result = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => tracing_subscriber::registry()
            .with(layer.with_filter(EnvFilter::new(directives)))
            .try_init(),
        Err(_) => tracing_subscriber::registry()
            .with(layer.with_filter(targets(log_config)))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: logging already initialized: {e}");
    }
}

/// Create formatter layer based on format
fn create_format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacklex_config::LogLevel;
    use tracing::Level;

    #[test]
    fn test_targets_respect_phase_override() {
        let mut cfg = LogConfig::new(LogLevel::Warn);
        cfg.scanner = Some(Level::TRACE);
        let targets = targets(&cfg);

        assert!(targets.would_enable("stacklex::scanner", &Level::TRACE));
        assert!(!targets.would_enable("stacklex::api", &Level::INFO));
        assert!(targets.would_enable("stacklex::api", &Level::WARN));
        assert!(!targets.would_enable("other_crate", &Level::DEBUG));
    }
}
