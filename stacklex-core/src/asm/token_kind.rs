//! 汇编方言的 token 类型

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum AsmTokenKind {
    Newline,
    /// `->`
    Arrow,
    /// `name:`, stored without the colon
    Label(String),
    /// Bare word: mnemonic, register, section name
    Symbol(String),
    /// `@name`, stored without the sigil
    Macro(String),
    /// Text between double quotes; may arrive in several fragments
    Str(String),
    Number(i64),
}

impl AsmTokenKind {
    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            AsmTokenKind::Newline => "newline",
            AsmTokenKind::Arrow => "arrow",
            AsmTokenKind::Label(_) => "label",
            AsmTokenKind::Symbol(_) => "symbol",
            AsmTokenKind::Macro(_) => "macro",
            AsmTokenKind::Str(_) => "string",
            AsmTokenKind::Number(_) => "number",
        }
    }
}

impl fmt::Display for AsmTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmTokenKind::Newline => write!(f, "NEWLINE"),
            AsmTokenKind::Arrow => write!(f, "ARROW"),
            AsmTokenKind::Label(name) => write!(f, "LABEL {name}:"),
            AsmTokenKind::Symbol(name) => write!(f, "SYMBOL {name}"),
            AsmTokenKind::Macro(name) => write!(f, "MACRO {name}"),
            AsmTokenKind::Str(text) => write!(f, "STRING \"{text}\""),
            AsmTokenKind::Number(n) => write!(f, "NUMBER {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AsmTokenKind::Newline.to_string(), "NEWLINE");
        assert_eq!(AsmTokenKind::Label("main".into()).to_string(), "LABEL main:");
        assert_eq!(AsmTokenKind::Str("hi".into()).to_string(), "STRING \"hi\"");
        assert_eq!(AsmTokenKind::Number(-1).to_string(), "NUMBER -1");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&AsmTokenKind::Number(255)).unwrap();
        assert_eq!(json, r#"{"type":"Number","value":255}"#);

        let json = serde_json::to_string(&AsmTokenKind::Arrow).unwrap();
        assert_eq!(json, r#"{"type":"Arrow"}"#);
    }
}
