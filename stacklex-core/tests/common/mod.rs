//! 测试辅助工具
//!
//! A small grammar with a `root` and a `string` state, used by the property
//! tests.

#![allow(dead_code)]

use stacklex_core::kit::scanner::{NextState, Rule, RuleTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    Word(String),
    Num(u32),
    Str(String),
    Quote,
    Space,
}

pub fn root_rules() -> Vec<Rule<Tok>> {
    vec![
        Rule::skip(r"[ \t\n]+").unwrap(),
        Rule::new(r"[0-9]+", |s| s.parse().ok().map(Tok::Num)).unwrap(),
        Rule::with_next("\"", NextState::push("string"), |_| Some(Tok::Quote)).unwrap(),
        Rule::new("[a-z]+", |s| Some(Tok::Word(s.to_string()))).unwrap(),
    ]
}

pub fn string_rules() -> Vec<Rule<Tok>> {
    vec![
        Rule::new("[^\"]+", |s| Some(Tok::Str(s.to_string()))).unwrap(),
        Rule::with_next("\"", NextState::Pop, |_| Some(Tok::Quote)).unwrap(),
    ]
}

pub fn table() -> RuleTable<Tok> {
    RuleTable::new()
        .with_state("root", root_rules())
        .with_state("string", string_rules())
}

/// Same grammar, but whitespace emits `Space` so every match leaves a token.
pub fn marked_table() -> RuleTable<Tok> {
    let mut root = root_rules();
    root[0] = Rule::new(r"[ \t\n]+", |_| Some(Tok::Space)).unwrap();
    RuleTable::new()
        .with_state("root", root)
        .with_state("string", string_rules())
}
