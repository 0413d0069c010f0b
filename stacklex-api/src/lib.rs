//! Stacklex API - Tokenization entry points
//!
//! Provides a unified interface over the core scanner, including:
//! - Tokenization with explicit configuration (RunConfig)
//! - Source and config file loading
//! - Unified error handling (StacklexError) with serializable reports

use std::path::Path;

use stacklex_core::asm;
use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{ErrorReport, ScanError, StacklexError};
pub use types::{TokenReport, TokenizeOutput};

// Re-export core types
pub use stacklex_config;
pub use stacklex_core::asm::AsmTokenKind;

const TARGET: &str = "stacklex::api";

/// Tokenize assembly source with explicit configuration
pub fn tokenize(source: &str, config: &RunConfig) -> Result<TokenizeOutput, StacklexError> {
    info!(target: TARGET, bytes = source.len(), "Starting tokenization");

    let output = asm::tokenize_with_config(source, config.scanner.clone())?;

    info!(
        target: TARGET,
        tokens = output.tokens.len(),
        position = output.position,
        "Tokenization completed"
    );
    Ok(TokenizeOutput {
        tokens: output.tokens,
        position: output.position,
        final_state: output.final_state,
    })
}

/// Read a source file into memory
pub fn read_source(path: &Path) -> Result<String, StacklexError> {
    debug!(target: TARGET, path = %path.display(), "Reading source");
    std::fs::read_to_string(path).map_err(|e| StacklexError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read and tokenize a source file
pub fn tokenize_file(path: &Path, config: &RunConfig) -> Result<TokenizeOutput, StacklexError> {
    let source = read_source(path)?;
    tokenize(&source, config)
}

/// Load a JSON project configuration file
pub fn load_config(path: &Path) -> Result<stacklex_config::StacklexConfig, StacklexError> {
    let content = read_source(path)?;
    serde_json::from_str(&content)
        .map_err(|e| StacklexError::Config(format!("{}: {}", path.display(), e)))
}
