//! 状态栈
//!
//! Never empty: it starts with one state, and popping the last one is an
//! error rather than a silent no-op.

use super::error::ScanError;
use super::position::SourcePosition;
use super::rule::StateId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStack {
    states: Vec<StateId>,
    max_depth: usize,
}

impl StateStack {
    pub fn new(initial: impl Into<StateId>, max_depth: usize) -> Self {
        Self {
            states: vec![initial.into()],
            max_depth: max_depth.max(1),
        }
    }

    /// Currently active state
    pub fn top(&self) -> &str {
        // 构造时至少有一个元素，pop 不会移除最后一个
        self.states.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Bottom to top
    pub fn as_slice(&self) -> &[StateId] {
        &self.states
    }

    /// `at` is only used to annotate the error.
    pub fn push(&mut self, state: StateId, at: SourcePosition) -> Result<(), ScanError> {
        if self.states.len() >= self.max_depth {
            return Err(ScanError::StackOverflow {
                position: at,
                state,
                depth: self.max_depth,
            });
        }
        self.states.push(state);
        Ok(())
    }

    pub fn pop(&mut self, at: SourcePosition) -> Result<StateId, ScanError> {
        if self.states.len() <= 1 {
            return Err(ScanError::EmptyStack {
                position: at,
                state: self.top().to_string(),
            });
        }
        self.states.pop().ok_or_else(|| ScanError::EmptyStack {
            position: at,
            state: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let at = SourcePosition::start();
        let mut stack = StateStack::new("root", 8);
        assert_eq!(stack.top(), "root");

        stack.push("string".to_string(), at).unwrap();
        assert_eq!(stack.top(), "string");
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop(at).unwrap(), "string");
        assert_eq!(stack.top(), "root");
    }

    #[test]
    fn test_pop_last_state_fails() {
        let at = SourcePosition::new(1, 4, 3);
        let mut stack = StateStack::new("root", 8);

        let err = stack.pop(at).unwrap_err();
        assert_eq!(
            err,
            ScanError::EmptyStack {
                position: at,
                state: "root".to_string()
            }
        );
        // 栈保持不变
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_push_beyond_max_depth() {
        let at = SourcePosition::start();
        let mut stack = StateStack::new("root", 2);
        stack.push("a".to_string(), at).unwrap();

        let err = stack.push("b".to_string(), at).unwrap_err();
        assert!(
            matches!(err, ScanError::StackOverflow { depth: 2, ref state, .. } if state == "b")
        );
        assert_eq!(stack.as_slice(), ["root".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_zero_max_depth_still_holds_initial_state() {
        let stack = StateStack::new("root", 0);
        assert_eq!(stack.max_depth(), 1);
        assert_eq!(stack.top(), "root");
    }
}
