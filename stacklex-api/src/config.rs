//! API 层配置

use stacklex_config::{ScannerConfig, StacklexConfig};

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Scanner behaviour (start state, limits, strictness)
    pub scanner: ScannerConfig,
    /// Whether the driver should echo the source before the tokens
    pub show_source: bool,
}

impl RunConfig {
    /// Build from a project configuration file
    pub fn from_config(config: &StacklexConfig) -> Self {
        Self {
            scanner: config.scanner.clone(),
            show_source: config.show_source,
        }
    }

    /// Require every pushed state to be closed before the input ends.
    pub fn strict(mut self) -> Self {
        self.scanner.require_start_state_at_end = true;
        self
    }
}
