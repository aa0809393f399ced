//! Structural pattern matching over dynamic values.
//!
//! Cases pair a pattern with a handler. [`evaluate`] runs a declaration
//! callback that registers cases in order, then invokes the handler of the
//! first case whose pattern accepts the value.
//!
//! # Example
//!
//! ```rust
//! use matchlight::{MatchError, Pattern, Value, evaluate, types::NUMBER};
//!
//! fn describe(value: &Value) -> Result<String, MatchError> {
//!     evaluate(value, |cases| {
//!         let seek = cases.by_type("...")?;
//!         cases
//!             .on(2, |_| "two".to_owned())
//!             .on(NUMBER, |v| format!("{v} is a number"))
//!             .on(vec![Pattern::from(1), seek, Pattern::from(5)], |_| "ends in five".to_owned())
//!             .on(Pattern::object([("kind", "circle")]), |_| "a circle".to_owned());
//!         cases.or_default(|v| format!("no idea what {v} is"))?;
//!         Ok(())
//!     })
//! }
//!
//! assert_eq!(describe(&Value::from(2)).unwrap(), "two");
//! assert_eq!(describe(&Value::from(-3)).unwrap(), "-3 is a number");
//! assert_eq!(describe(&Value::from(vec![1, 2, 3, 4, 5])).unwrap(), "ends in five");
//! assert_eq!(describe(&Value::from("2")).unwrap(), "no idea what 2 is");
//! ```

mod error;
pub mod pattern;
mod resolver;
pub mod table;
pub mod types;
mod value;

pub use error::MatchError;
pub use pattern::{Check, Pattern, Predicate, Tester, compile};
pub use resolver::{Cases, evaluate, evaluate_arguments};
pub use table::{CaseTable, Selection};
pub use value::{Function, Object, Symbol, Value};
