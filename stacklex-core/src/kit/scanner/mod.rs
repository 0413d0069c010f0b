//! Stacklex 规则扫描器
//!
//! A generic lexical scanner driven by a stack of named states:
//! - 规则：锚定在游标处的正则 + 产生 token 的闭包 + 状态转移指令
//! - 首个匹配胜出（按声明顺序），不做最长匹配
//! - 状态栈：`Push` 进入子状态（如字符串内部），`Pop` 返回
//!
//! # 示例
//!
//! ```
//! use stacklex_core::kit::scanner::{NextState, Rule, Scanner};
//!
//! let mut scanner = Scanner::new("say \"hi\"");
//! scanner.register_state("root", vec![
//!     Rule::skip(r"\s+").unwrap(),
//!     Rule::with_next("\"", NextState::push("string"), |_| None).unwrap(),
//!     Rule::new("[a-z]+", |s| Some(s.to_uppercase())).unwrap(),
//! ]);
//! scanner.register_state("string", vec![
//!     Rule::new("[^\"]+", |s| Some(s.to_string())).unwrap(),
//!     Rule::with_next("\"", NextState::Pop, |_| None).unwrap(),
//! ]);
//!
//! let output = scanner.run().unwrap();
//! assert_eq!(output.into_kinds(), vec!["SAY".to_string(), "hi".to_string()]);
//! ```

pub mod error;
pub mod position;
pub mod rule;
#[allow(clippy::module_inception)]
pub mod scanner;
pub mod stack;
pub mod stream;
pub mod table;
pub mod token;

pub use error::{ErrorKind, ScanError};
pub use position::{SourcePosition, SourceSpan};
pub use rule::{Action, NextState, Rule, RuleMatch, StateId, ROOT_STATE};
pub use scanner::{ScanOutput, Scanner};
pub use stack::StateStack;
pub use stream::Stream;
pub use table::RuleTable;
pub use token::Token;
