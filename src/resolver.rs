//! Case resolution: declare an ordered list of cases, then dispatch the first
//! one that accepts the value.
//!
//! Every call to [`evaluate`] builds a fresh [`Cases`] list, so handlers may
//! call back into [`evaluate`] without disturbing the outer evaluation.

use tracing::{debug, trace};

use crate::error::MatchError;
use crate::pattern::{Check, Pattern, compile};
use crate::types;
use crate::value::Value;

type Handler<'a, R> = Box<dyn FnOnce(&Value) -> R + 'a>;

struct Case<'a, R> {
    check: Check,
    handler: Handler<'a, R>,
}

/// The ordered case list of a single evaluation.
///
/// Cases are tested in registration order. At most one default may be
/// registered.
pub struct Cases<'a, R> {
    cases: Vec<Case<'a, R>>,
    has_default: bool,
}

impl<'a, R> Cases<'a, R> {
    fn new() -> Self {
        Self {
            cases: Vec::new(),
            has_default: false,
        }
    }

    /// Register a case. The pattern is compiled immediately.
    pub fn on<P, F>(&mut self, pattern: P, handler: F) -> &mut Self
    where
        P: Into<Pattern>,
        F: FnOnce(&Value) -> R + 'a,
    {
        let check = compile(&pattern.into());
        trace!(index = self.cases.len(), "registered case");
        self.cases.push(Case {
            check,
            handler: Box::new(handler),
        });
        self
    }

    /// Register the catch-all case. It takes its place in registration order
    /// like any other case.
    ///
    /// Fails with [`MatchError::DuplicateDefault`] on the second call.
    pub fn or_default<F>(&mut self, handler: F) -> Result<&mut Self, MatchError>
    where
        F: FnOnce(&Value) -> R + 'a,
    {
        if self.has_default {
            return Err(MatchError::DuplicateDefault);
        }
        self.has_default = true;
        trace!(index = self.cases.len(), "registered default case");
        self.cases.push(Case {
            check: Check::Always,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Resolve a type name, including the `"...rest"` and `"..."` tokens.
    /// See [`types::lookup`].
    pub fn by_type(&self, name: &str) -> Result<Pattern, MatchError> {
        types::lookup(name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Find the first accepting case and run its handler. Exactly one handler
    /// runs on success; none on failure.
    fn resolve(self, value: &Value) -> Result<R, MatchError> {
        let (index, case) = self
            .cases
            .into_iter()
            .enumerate()
            .find(|(index, case)| {
                trace!(index = *index, "testing case");
                case.check.accepts(value)
            })
            .ok_or(MatchError::NoMatch)?;
        debug!(index, %value, "dispatching case");
        Ok((case.handler)(value))
    }
}

/// Match `value` against the cases registered by `declare`.
///
/// `declare` runs once, synchronously, before any case is tested. An error it
/// returns (such as a duplicate default) is passed straight through.
///
/// ```rust
/// use matchlight::{Pattern, Value, evaluate, types::NUMBER};
///
/// let value = Value::from(vec![1, 2, 3, 4, 5]);
/// let tail = evaluate(&value, |cases| {
///     cases
///         .on(vec![1, 2, 3, 4], |_| Value::Null)
///         .on(vec![Pattern::from(NUMBER), Pattern::from(2), Pattern::Rest], |v| {
///             Value::from(v.as_array().unwrap()[2..].to_vec())
///         });
///     Ok(())
/// });
/// assert_eq!(tail, Ok(Value::from(vec![3, 4, 5])));
/// ```
pub fn evaluate<'a, R, D>(value: &Value, declare: D) -> Result<R, MatchError>
where
    D: FnOnce(&mut Cases<'a, R>) -> Result<(), MatchError>,
{
    let mut cases = Cases::new();
    declare(&mut cases)?;
    cases.resolve(value)
}

/// Match a positional argument list, collected into an array value.
pub fn evaluate_arguments<'a, R, I, D>(args: I, declare: D) -> Result<R, MatchError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
    D: FnOnce(&mut Cases<'a, R>) -> Result<(), MatchError>,
{
    let value = Value::Array(args.into_iter().map(Into::into).collect());
    evaluate(&value, declare)
}
