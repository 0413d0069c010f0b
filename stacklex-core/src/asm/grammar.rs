//! 汇编方言的规则表
//!
//! Two states: `root` for instructions and `string` for the inside of a
//! double-quoted literal. Rule order matters: numbers before symbols, labels
//! before bare symbols.

use std::sync::Arc;

use once_cell::sync::Lazy;
use stacklex_config::ScannerConfig;

use super::token_kind::AsmTokenKind;
use crate::kit::scanner::{NextState, Rule, RuleTable, ScanError, ScanOutput, Scanner, ROOT_STATE};

/// State entered after an opening quote
pub const STRING_STATE: &str = "string";

// 规则表只构建一次，所有扫描器共享
static GRAMMAR: Lazy<Result<Arc<RuleTable<AsmTokenKind>>, ScanError>> =
    Lazy::new(|| build_grammar().map(Arc::new));

/// Shared rule table of the assembly dialect
pub fn grammar() -> Result<Arc<RuleTable<AsmTokenKind>>, ScanError> {
    (*GRAMMAR).clone()
}

/// Build a fresh, unshared rule table.
pub fn build_grammar() -> Result<RuleTable<AsmTokenKind>, ScanError> {
    Ok(RuleTable::new()
        .with_state(ROOT_STATE, root_rules()?)
        .with_state(STRING_STATE, string_rules()?))
}

fn root_rules() -> Result<Vec<Rule<AsmTokenKind>>, ScanError> {
    Ok(vec![
        // whitespace
        Rule::emit(r"\n", AsmTokenKind::Newline)?,
        Rule::skip(r"[^\S\n]+")?,
        // comment，换行留给 Newline 规则
        Rule::skip(r";[^\n]*")?,
        // numbers
        Rule::new("0x[0-9a-fA-F]+", |s| {
            Some(AsmTokenKind::Number(parse_radix(&s[2..], 16)))
        })?,
        Rule::new("0b[01]+", |s| {
            Some(AsmTokenKind::Number(parse_radix(&s[2..], 2)))
        })?,
        // ASCII digits only, the set parse_radix decodes
        Rule::new("[0-9]+", |s| Some(AsmTokenKind::Number(parse_radix(s, 10))))?,
        Rule::emit("->", AsmTokenKind::Arrow)?,
        Rule::with_next("\"", NextState::push(STRING_STATE), |_| None)?,
        Rule::new("[a-zA-Z_]+:", |s| {
            s.strip_suffix(':')
                .map(|name| AsmTokenKind::Label(name.to_string()))
        })?,
        Rule::new("@[a-zA-Z_]+", |s| {
            s.strip_prefix('@')
                .map(|name| AsmTokenKind::Macro(name.to_string()))
        })?,
        Rule::new("[a-zA-Z_]+", |s| Some(AsmTokenKind::Symbol(s.to_string())))?,
    ])
}

fn string_rules() -> Result<Vec<Rule<AsmTokenKind>>, ScanError> {
    Ok(vec![
        Rule::new("[^\"]+", |s| Some(AsmTokenKind::Str(s.to_string())))?,
        Rule::with_next("\"", NextState::Pop, |_| None)?,
    ])
}

/// Decode digits already validated by the pattern; saturates at `i64::MAX`.
fn parse_radix(digits: &str, radix: u32) -> i64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        })
}

/// Tokenize assembly source with the default configuration.
pub fn tokenize(source: &str) -> Result<ScanOutput<AsmTokenKind>, ScanError> {
    tokenize_with_config(source, ScannerConfig::default())
}

pub fn tokenize_with_config(
    source: &str,
    config: ScannerConfig,
) -> Result<ScanOutput<AsmTokenKind>, ScanError> {
    Scanner::with_table(source, grammar()?)
        .with_config(config)
        .run()
}
