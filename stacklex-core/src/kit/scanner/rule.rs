//! 匹配规则
//!
//! A rule is a (pattern, directive, action) triple. The pattern is anchored:
//! it is only ever tested against the start of the unmatched remainder.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::error::ScanError;
use super::position::SourceSpan;
use super::stream::Stream;
use super::token::Token;

/// 状态名
pub type StateId = String;

/// Name of the state a scanner starts in unless configured otherwise
pub const ROOT_STATE: &str = stacklex_config::DEFAULT_START_STATE;

/// State-stack directive applied after a rule matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextState {
    /// Keep scanning with the current rule list
    Stay,
    /// Return to the state below the current one
    Pop,
    /// Enter the named state until it is popped
    Push(StateId),
}

impl NextState {
    pub fn push(state: impl Into<StateId>) -> Self {
        NextState::Push(state.into())
    }
}

/// Token-producing action. `None` consumes the match without emitting.
pub type Action<K> = Arc<dyn Fn(&str) -> Option<K> + Send + Sync>;

/// 一条规则
pub struct Rule<K> {
    pattern: String,
    regex: Regex,
    next: NextState,
    action: Action<K>,
}

/// Result of a successful [`Rule::try_match`]
#[derive(Debug, Clone)]
pub struct RuleMatch<K> {
    /// Stream advanced past the matched text
    pub stream: Stream,
    pub token: Option<Token<K>>,
    pub next: NextState,
    /// Matched length in bytes
    pub len: usize,
}

impl<K> Rule<K> {
    /// Build a rule that stays in the current state.
    pub fn new<F>(pattern: &str, action: F) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<K> + Send + Sync + 'static,
    {
        Self::with_next(pattern, NextState::Stay, action)
    }

    pub fn with_next<F>(pattern: &str, next: NextState, action: F) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<K> + Send + Sync + 'static,
    {
        // 非捕获组包裹，保证 `a|b` 这类模式整体锚定
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
            ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            next,
            action: Arc::new(action),
        })
    }

    /// Consume matches without emitting a token (whitespace, comments).
    pub fn skip(pattern: &str) -> Result<Self, ScanError> {
        Self::new(pattern, |_| None)
    }

    /// Emit a fixed token for every match.
    pub fn emit(pattern: &str, kind: K) -> Result<Self, ScanError>
    where
        K: Clone + Send + Sync + 'static,
    {
        Self::new(pattern, move |_| Some(kind.clone()))
    }

    /// Source pattern, as written by the grammar author
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn next(&self) -> &NextState {
        &self.next
    }

    /// Test the rule at the stream's cursor.
    ///
    /// `Ok(None)` means the pattern did not match; that is not a failure.
    pub fn try_match(&self, stream: &Stream) -> Result<Option<RuleMatch<K>>, ScanError> {
        let matched = match self.regex.find(stream.remainder()) {
            Some(m) => m,
            None => return Ok(None),
        };

        let len = matched.end();
        let advanced = stream.advance(len)?;
        let span = SourceSpan::range(stream.location(), advanced.location());
        let token = (self.action)(matched.as_str()).map(|kind| Token::new(kind, span));

        Ok(Some(RuleMatch {
            stream: advanced,
            token,
            next: self.next.clone(),
            len,
        }))
    }
}

impl<K> Clone for Rule<K> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            regex: self.regex.clone(),
            next: self.next.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<K> fmt::Debug for Rule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matches_prefix() {
        let rule = Rule::new(r"\d+", |s| s.parse::<i64>().ok()).unwrap();
        let stream = Stream::new("123abc");

        let m = rule.try_match(&stream).unwrap().unwrap();
        assert_eq!(m.len, 3);
        assert_eq!(m.stream.remainder(), "abc");
        assert_eq!(m.token.map(|t| t.kind), Some(123));
        assert_eq!(m.next, NextState::Stay);
    }

    #[test]
    fn test_rule_is_anchored() {
        let rule = Rule::emit("b", ()).unwrap();
        assert!(rule.try_match(&Stream::new("ab")).unwrap().is_none());

        // 交替模式也必须整体锚定
        let rule = Rule::emit("x|b", ()).unwrap();
        assert!(rule.try_match(&Stream::new("ab")).unwrap().is_none());
    }

    #[test]
    fn test_rule_anchored_at_cursor_not_text_start() {
        let rule = Rule::emit("b", 'b').unwrap();
        let stream = Stream::new("ab").advance(1).unwrap();
        assert!(rule.try_match(&stream).unwrap().is_some());
    }

    #[test]
    fn test_skip_rule_consumes_without_token() {
        let rule: Rule<()> = Rule::skip(r"[ \t]+").unwrap();
        let m = rule.try_match(&Stream::new("   x")).unwrap().unwrap();
        assert!(m.token.is_none());
        assert_eq!(m.len, 3);
    }

    #[test]
    fn test_action_sees_exact_match() {
        let rule = Rule::new("[a-z]+:", |s| Some(s.to_string())).unwrap();
        let m = rule.try_match(&Stream::new("main: x")).unwrap().unwrap();
        assert_eq!(m.token.unwrap().kind, "main:");
    }

    #[test]
    fn test_token_span() {
        let rule = Rule::emit("->", "arrow").unwrap();
        let stream = Stream::new("A -> B").advance(2).unwrap();
        let token = rule.try_match(&stream).unwrap().unwrap().token.unwrap();
        assert_eq!(token.span.start.column, 3);
        assert_eq!(token.span.end.column, 5);
        assert_eq!(token.span.len(), 2);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::<()>::skip("(unclosed").unwrap_err();
        assert!(
            matches!(err, ScanError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed")
        );
    }

    #[test]
    fn test_with_next_directive() {
        let rule: Rule<()> = Rule::with_next("\"", NextState::push("string"), |_| None).unwrap();
        let m = rule.try_match(&Stream::new("\"hi\"")).unwrap().unwrap();
        assert_eq!(m.next, NextState::Push("string".to_string()));
        assert_eq!(rule.pattern(), "\"");
    }
}
