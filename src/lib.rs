//! Stacklex - a state-stack-driven lexical scanner
//!
//! Converts a text buffer into typed tokens by repeatedly matching anchored
//! patterns at the cursor. Each named state owns an ordered rule list; rules
//! can push a new state (e.g. on an opening quote) or pop back to the
//! previous one.
//!
//! # Architecture
//!
//! ```text
//! stacklex-config/  - Pure configuration data
//! stacklex-core/    - Scanner engine (kit::scanner) + reference assembly grammar (asm)
//! stacklex-api/     - Tokenization entry points, unified errors and reports
//! stacklex-cli/     - `stacklex` binary
//! ```
//!
//! # Quick Start
//!
//! ```
//! use stacklex::{tokenize, AsmTokenKind, RunConfig};
//!
//! let output = tokenize("A -> B", &RunConfig::default()).unwrap();
//! assert_eq!(output.tokens[1].kind, AsmTokenKind::Arrow);
//! assert_eq!(output.position, 6);
//! ```

pub use stacklex_api::{
    load_config, read_source, tokenize, tokenize_file, AsmTokenKind, ErrorReport, RunConfig,
    StacklexError, TokenReport, TokenizeOutput,
};
pub use stacklex_config::{LogLevel, OutputFormat, ScannerConfig, StacklexConfig};
pub use stacklex_core::asm;
pub use stacklex_core::kit::scanner::{
    ErrorKind, NextState, Rule, RuleTable, ScanError, ScanOutput, Scanner, SourcePosition,
    SourceSpan, StateId, StateStack, Stream, Token, ROOT_STATE,
};
