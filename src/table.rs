//! Declarative case tables.
//!
//! A case table is a JSON document listing patterns (in the notation of
//! [`pattern::notation`](crate::pattern::notation)) and the result each one
//! selects:
//!
//! ```json
//! {
//!   "cases": [
//!     { "pattern": [1, 2, { "$type": "..." }, 5], "result": "seek" },
//!     { "pattern": { "$type": "number" }, "result": "number" }
//!   ],
//!   "default": "other"
//! }
//! ```

use serde::Deserialize;
use serde_json::Value as Json;

use crate::error::MatchError;
use crate::pattern::{Pattern, from_json};
use crate::resolver::evaluate;
use crate::value::Value;

/// One row of a case table.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseEntry {
    pub pattern: Json,
    pub result: Json,
}

/// A case table as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseTable {
    pub cases: Vec<CaseEntry>,
    #[serde(default)]
    pub default: Option<Json>,
}

/// The outcome of evaluating a value against a [`CaseTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Index of the matching entry, or `None` for the default.
    pub index: Option<usize>,
    pub result: Json,
}

impl CaseTable {
    /// Evaluate `value` against the table. Patterns are compiled from their
    /// notation on every call.
    pub fn select(&self, value: &Value) -> Result<Selection, MatchError> {
        let patterns = self
            .cases
            .iter()
            .map(|entry| from_json(&entry.pattern))
            .collect::<Result<Vec<Pattern>, _>>()?;

        evaluate(value, |cases| {
            for (index, (pattern, entry)) in patterns.into_iter().zip(&self.cases).enumerate() {
                cases.on(pattern, move |_| Selection {
                    index: Some(index),
                    result: entry.result.clone(),
                });
            }
            if let Some(default) = &self.default {
                cases.or_default(|_| Selection {
                    index: None,
                    result: default.clone(),
                })?;
            }
            Ok(())
        })
    }
}
