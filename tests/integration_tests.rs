//! 集成测试 - 端到端扫描测试

mod common;

use common::{lex, symbol};
use stacklex::{
    asm, tokenize, AsmTokenKind, NextState, RunConfig, Rule, ScanError, Scanner, SourcePosition,
};
use AsmTokenKind::*;

#[test]
fn test_symbols_and_arrow() {
    let output = asm::tokenize("A -> B").unwrap();
    assert_eq!(output.position, 6);
    assert_eq!(output.into_kinds(), vec![symbol("A"), Arrow, symbol("B")]);
}

#[test]
fn test_hex_number() {
    assert_eq!(lex("0xFF").unwrap(), vec![Number(255)]);
}

#[test]
fn test_binary_number() {
    assert_eq!(lex("0b101").unwrap(), vec![Number(5)]);
}

#[test]
fn test_quoted_string_returns_to_root() {
    let output = asm::tokenize("\"hi\"").unwrap();
    assert_eq!(output.final_state, "root");
    assert_eq!(output.into_kinds(), vec![Str("hi".to_string())]);
}

#[test]
fn test_unmatched_character() {
    let err = lex("$").unwrap_err();
    assert!(matches!(
        err,
        ScanError::UnmatchedInput { position, ref state, .. }
            if position.byte_offset == 0 && state == "root"
    ));
}

#[test]
fn test_unmatched_with_grammar_lacking_rule() {
    let mut scanner = Scanner::new("x");
    scanner.register_state("root", vec![Rule::emit(r"\d+", ()).unwrap()]);
    let err = scanner.run().unwrap_err();
    assert_eq!(
        err,
        ScanError::UnmatchedInput {
            position: SourcePosition::start(),
            state: "root".to_string(),
            snippet: "x".to_string(),
        }
    );
}

#[test]
fn test_label_drops_colon() {
    assert_eq!(lex("label:").unwrap(), vec![Label("label".to_string())]);
}

#[test]
fn test_full_program() {
    let source = "main:\n\
                  load 0xFFAA -> A ; some memory loading\n\
                  add A 10 -> A\n\
                  or A 0b001101 -> B\n\
                  \n\
                  DATA\n\
                  test_string: DS \"Some string 0 0xFF 0b11\"";

    let expected = vec![
        Label("main".to_string()),
        Newline,
        symbol("load"),
        Number(0xFFAA),
        Arrow,
        symbol("A"),
        Newline,
        symbol("add"),
        symbol("A"),
        Number(10),
        Arrow,
        symbol("A"),
        Newline,
        symbol("or"),
        symbol("A"),
        Number(13),
        Arrow,
        symbol("B"),
        Newline,
        Newline,
        symbol("DATA"),
        Newline,
        Label("test_string".to_string()),
        symbol("DS"),
        Str("Some string 0 0xFF 0b11".to_string()),
    ];
    assert_eq!(lex(source).unwrap(), expected);
}

#[test]
fn test_error_position_on_later_line() {
    let err = lex("main:\n  load %").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.column(), Some(8));
}

#[test]
fn test_api_report_for_unterminated_string() {
    let err = tokenize("DS \"never closed", &RunConfig::default().strict()).unwrap_err();
    let report = err.to_report();

    assert_eq!(report.error_kind, "UnterminatedState");
    assert_eq!(report.state.as_deref(), Some("string"));
    assert_eq!(report.line, Some(1));
}

#[test]
fn test_token_reports_serialize() {
    let output = tokenize("@init main:", &RunConfig::default()).unwrap();
    let json = serde_json::to_value(output.reports()).unwrap();

    assert_eq!(json[0]["text"], "MACRO init");
    assert_eq!(json[1]["kind"], "label");
    assert_eq!(json[1]["column"], 7);
}

#[test]
fn test_custom_grammar_through_facade() {
    let mut scanner = Scanner::new("<a<b>>");
    scanner.register_state(
        "root",
        vec![Rule::with_next("<", NextState::push("tag"), |_| None).unwrap()],
    );
    scanner.register_state(
        "tag",
        vec![
            Rule::with_next("<", NextState::push("tag"), |_| None).unwrap(),
            Rule::with_next(">", NextState::Pop, |_| None).unwrap(),
            Rule::new("[a-z]", |s| Some(s.to_string())).unwrap(),
        ],
    );
    let output = scanner.run().unwrap();
    assert_eq!(output.position, 6);
    assert_eq!(output.final_state, "root");
    assert_eq!(output.into_kinds(), vec!["a", "b"]);
}
