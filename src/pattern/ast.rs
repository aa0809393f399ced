//! User-authored pattern types.

use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::value::Value;

/// A description of a shape to test a [`Value`] against.
///
/// Raw values are classified when the pattern is compiled, so
/// `Pattern::from(Value::Array(..))` behaves like an array template and
/// `Pattern::from(Value::Undefined)` like a hole.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches any single value. Used for holes in array templates.
    Any,
    /// A raw value, classified at compile time.
    Value(Value),
    /// A reusable boolean check.
    Predicate(Predicate),
    /// Anything exposing a `test` capability, such as a [`Regex`].
    Regex(Rc<dyn Tester>),
    /// Positional template for arrays.
    Array(Vec<Pattern>),
    /// Keyed template for objects. Undeclared properties are ignored.
    Object(Vec<(String, Pattern)>),
    /// Absorbs the remainder of an array. Only meaningful inside [`Pattern::Array`].
    Rest,
    /// Skips forward to the next element satisfying the following entry.
    /// Only meaningful inside [`Pattern::Array`].
    Seek,
}

impl Pattern {
    pub fn predicate(check: impl Fn(&Value) -> bool + 'static) -> Self {
        Pattern::Predicate(Predicate::new(check))
    }

    pub fn regex(tester: impl Tester + 'static) -> Self {
        Pattern::Regex(Rc::new(tester))
    }

    pub fn object<K, P>(entries: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
    {
        Pattern::Object(
            entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern.into()))
                .collect(),
        )
    }
}

/// A one-argument boolean check over values.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn(&Value) -> bool>);

impl Predicate {
    pub fn new(check: impl Fn(&Value) -> bool + 'static) -> Self {
        Self(Rc::new(check))
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// The "has a `test` capability" shape.
pub trait Tester: fmt::Debug {
    fn test(&self, value: &Value) -> bool;
}

/// Regexes test the string coercion of the value, so `/4/` accepts `4`.
impl Tester for Regex {
    fn test(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.is_match(s),
            other => self.is_match(&other.to_string()),
        }
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::Value(value)
    }
}

macro_rules! pattern_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Pattern {
                fn from(v: $t) -> Self {
                    Pattern::Value(Value::from(v))
                }
            }
        )*
    };
}

pattern_from_primitive!(bool, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
pattern_from_primitive!(&str, String);

impl From<Predicate> for Pattern {
    fn from(predicate: Predicate) -> Self {
        Pattern::Predicate(predicate)
    }
}

impl From<fn(&Value) -> bool> for Pattern {
    fn from(check: fn(&Value) -> bool) -> Self {
        Pattern::predicate(check)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::regex(re)
    }
}

impl<T: Into<Pattern>> From<Vec<T>> for Pattern {
    fn from(items: Vec<T>) -> Self {
        Pattern::Array(items.into_iter().map(Into::into).collect())
    }
}
