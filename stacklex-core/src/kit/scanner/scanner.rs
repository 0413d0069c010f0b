//! 状态栈驱动的扫描器
//!
//! Repeatedly picks the first rule of the active state that matches at the
//! cursor (first match wins, never longest match), emits its token and
//! applies its directive to the state stack until the input is exhausted.

use std::sync::Arc;

use stacklex_config::ScannerConfig;
use tracing::{debug, trace, warn};

use super::error::ScanError;
use super::rule::{NextState, Rule, RuleMatch, StateId};
use super::stack::StateStack;
use super::stream::Stream;
use super::table::RuleTable;
use super::token::Token;

const TARGET: &str = "stacklex::scanner";

/// Scanner over a single input
///
/// Owns its stream exclusively; the rule table may be shared with other
/// scanners.
pub struct Scanner<K> {
    stream: Stream,
    table: Arc<RuleTable<K>>,
    config: ScannerConfig,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<K> {
    /// Tokens in source order
    pub tokens: Vec<Token<K>>,
    /// Final cursor (bytes consumed)
    pub position: usize,
    /// State on top of the stack when the input ran out
    pub final_state: StateId,
}

impl<K> ScanOutput<K> {
    pub fn kinds(&self) -> Vec<&K> {
        self.tokens.iter().map(|t| &t.kind).collect()
    }

    pub fn into_kinds(self) -> Vec<K> {
        self.tokens.into_iter().map(|t| t.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K> Scanner<K> {
    /// Scanner with an empty rule table and the default configuration.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self::with_table(text, Arc::new(RuleTable::new()))
    }

    /// Scanner using an existing (possibly shared) rule table.
    pub fn with_table(text: impl Into<Arc<str>>, table: Arc<RuleTable<K>>) -> Self {
        Self {
            stream: Stream::new(text),
            table,
            config: ScannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register (or replace) the rules of `state`.
    ///
    /// A shared table is copied first, so other scanners never observe the
    /// change.
    pub fn register_state(&mut self, state: impl Into<StateId>, rules: Vec<Rule<K>>) {
        Arc::make_mut(&mut self.table).register(state, rules);
    }

    pub fn table(&self) -> &RuleTable<K> {
        &self.table
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scan the whole input.
    pub fn run(self) -> Result<ScanOutput<K>, ScanError> {
        let Scanner {
            mut stream,
            table,
            config,
        } = self;
        let table = &*table;

        let mut stack = StateStack::new(config.start_state.clone(), config.max_stack_depth);
        let mut tokens = Vec::new();
        // 连续零宽匹配计数，用于发现 Push/Pop 死循环
        let mut stalled = 0usize;
        let stall_limit = stack.max_depth().saturating_mul(2);

        debug!(
            target: TARGET,
            len = stream.len(),
            state = %stack.top(),
            states = table.len(),
            "Starting scan"
        );

        let mut rules = resolve(table, stack.top(), &stream)?;

        while !stream.is_exhausted() {
            let (rule, matched) = match first_match(rules, &stream)? {
                Some(found) => found,
                None => {
                    return Err(fail(ScanError::UnmatchedInput {
                        position: stream.location(),
                        state: stack.top().to_string(),
                        snippet: stream.snippet(config.snippet_len).to_string(),
                    }));
                }
            };

            if matched.len == 0 {
                stalled += 1;
                if matched.next == NextState::Stay || stalled > stall_limit {
                    return Err(fail(ScanError::EmptyMatch {
                        position: stream.location(),
                        state: stack.top().to_string(),
                        pattern: rule.pattern().to_string(),
                    }));
                }
            } else {
                stalled = 0;
            }

            trace!(
                target: TARGET,
                state = %stack.top(),
                position = stream.position(),
                len = matched.len,
                pattern = rule.pattern(),
                emitted = matched.token.is_some(),
                "Rule matched"
            );

            let RuleMatch {
                stream: advanced,
                token,
                next,
                ..
            } = matched;
            stream = advanced;
            tokens.extend(token);

            match next {
                NextState::Stay => {}
                NextState::Pop => {
                    let left = stack.pop(stream.location()).map_err(fail)?;
                    debug!(target: TARGET, from = %left, to = %stack.top(), "Popped state");
                    rules = resolve(table, stack.top(), &stream)?;
                }
                NextState::Push(state) => {
                    // 立即校验，避免错误延迟到下一次查找
                    let pushed = resolve(table, &state, &stream)?;
                    stack.push(state, stream.location()).map_err(fail)?;
                    debug!(
                        target: TARGET,
                        to = %stack.top(),
                        depth = stack.depth(),
                        "Pushed state"
                    );
                    rules = pushed;
                }
            }
        }

        if config.require_start_state_at_end && stack.depth() > 1 {
            return Err(fail(ScanError::UnterminatedState {
                position: stream.location(),
                state: stack.top().to_string(),
                depth: stack.depth(),
            }));
        }

        debug!(
            target: TARGET,
            tokens = tokens.len(),
            position = stream.position(),
            state = %stack.top(),
            "Scan finished"
        );

        Ok(ScanOutput {
            tokens,
            position: stream.position(),
            final_state: stack.top().to_string(),
        })
    }
}

/// Rule list of `state`, or `UnknownState`.
fn resolve<'t, K>(
    table: &'t RuleTable<K>,
    state: &str,
    stream: &Stream,
) -> Result<&'t [Rule<K>], ScanError> {
    table.rules(state).ok_or_else(|| {
        fail(ScanError::UnknownState {
            position: stream.location(),
            state: state.to_string(),
        })
    })
}

/// First rule in declaration order that matches at the cursor
fn first_match<'r, K>(
    rules: &'r [Rule<K>],
    stream: &Stream,
) -> Result<Option<(&'r Rule<K>, RuleMatch<K>)>, ScanError> {
    for rule in rules {
        if let Some(matched) = rule.try_match(stream).map_err(fail)? {
            return Ok(Some((rule, matched)));
        }
    }
    Ok(None)
}

fn fail(err: ScanError) -> ScanError {
    warn!(target: TARGET, kind = ?err.kind(), "{}", err);
    err
}
