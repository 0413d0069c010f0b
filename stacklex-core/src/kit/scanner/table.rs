//! 规则表：状态名 → 有序规则列表
//!
//! Populated before a run and read-only while scanning. A finished table is
//! `Send + Sync` and can be shared through an `Arc` by concurrent scanners.

use std::collections::HashMap;

use super::rule::{Rule, StateId};

pub struct RuleTable<K> {
    states: HashMap<StateId, Vec<Rule<K>>>,
}

impl<K> RuleTable<K> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register the rule list for `state`, replacing any earlier list.
    pub fn register(&mut self, state: impl Into<StateId>, rules: Vec<Rule<K>>) {
        self.states.insert(state.into(), rules);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_state(mut self, state: impl Into<StateId>, rules: Vec<Rule<K>>) -> Self {
        self.register(state, rules);
        self
    }

    /// Rules of `state` in declaration order
    pub fn rules(&self, state: &str) -> Option<&[Rule<K>]> {
        self.states.get(state).map(Vec::as_slice)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Registered state names, sorted
    pub fn states(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K> Default for RuleTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for RuleTable<K> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

impl<K> std::fmt::Debug for RuleTable<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.states.iter()).finish()
    }
}
