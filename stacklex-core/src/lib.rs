//! Stacklex Core - Core scanner (pure logic, no IO)
//!
//! Contains the state-stack rule scanner and the reference assembly grammar.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod asm;
pub mod kit;

// Re-export common types
pub use kit::scanner::{
    NextState, Rule, RuleTable, ScanError, ScanOutput, Scanner, SourcePosition, SourceSpan,
    StateId, Stream, Token,
};

// Re-export config types from stacklex-config
pub use stacklex_config::{Phase, ScannerConfig};
