//! Pattern compiler: turns a [`Pattern`] into an executable [`Check`].

use std::rc::Rc;

use tracing::trace;

use crate::value::{Function, Object, Value};

use super::ast::{Pattern, Predicate, Tester};

/// A compiled pattern.
///
/// Every variant is a pure check over a single value. `Rest` and `Seek` are
/// positional tokens: they reject any value tested directly and are read by
/// the array matcher as markers instead.
#[derive(Clone, Debug)]
pub enum Check {
    Always,
    Equals(Value),
    Predicate(Predicate),
    Test(Rc<dyn Tester>),
    Array(Vec<Check>),
    Object(Vec<(String, Check)>),
    Rest,
    Seek,
}

impl Check {
    pub fn is_rest(&self) -> bool {
        matches!(self, Check::Rest)
    }

    pub fn is_seek(&self) -> bool {
        matches!(self, Check::Seek)
    }
}

/// Compile a pattern into a [`Check`].
///
/// Raw values are classified in a fixed order: functions become predicates,
/// then arrays become templates, objects whose `test` property is a function
/// are tested through it, other objects become templates, `undefined` becomes
/// a hole and anything else is compared by strict equality.
pub fn compile(pattern: &Pattern) -> Check {
    let check = match pattern {
        Pattern::Any => Check::Always,
        Pattern::Value(value) => classify(value),
        Pattern::Predicate(predicate) => Check::Predicate(predicate.clone()),
        Pattern::Regex(tester) => Check::Test(Rc::clone(tester)),
        Pattern::Array(items) => Check::Array(items.iter().map(compile).collect()),
        Pattern::Object(entries) => Check::Object(
            entries
                .iter()
                .map(|(key, pattern)| (key.clone(), compile(pattern)))
                .collect(),
        ),
        Pattern::Rest => Check::Rest,
        Pattern::Seek => Check::Seek,
    };
    trace!(?check, "compiled pattern");
    check
}

fn classify(value: &Value) -> Check {
    match value {
        Value::Function(func) => Check::Predicate(function_predicate(func.clone())),
        Value::Array(items) => Check::Array(items.iter().map(classify).collect()),
        Value::Object(map) => classify_object(map),
        Value::Undefined => Check::Always,
        primitive => Check::Equals(primitive.clone()),
    }
}

/// Objects exposing a callable `test` are regex-like; everything else is a
/// structural template.
fn classify_object(map: &Object) -> Check {
    if let Some(Value::Function(test)) = map.get("test") {
        return Check::Predicate(function_predicate(test.clone()));
    }
    Check::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), classify(value)))
            .collect(),
    )
}

/// A function value used as a pattern is called with the candidate and its
/// result tested for truthiness.
fn function_predicate(func: Function) -> Predicate {
    Predicate::new(move |value| func.call(std::slice::from_ref(value)).is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_compiles_to_strict_equality() {
        match compile(&Pattern::from(2)) {
            Check::Equals(v) => assert!(v.strict_equals(&Value::from(2))),
            other => panic!("expected Equals, got {other:?}"),
        }
    }

    #[test]
    fn undefined_compiles_to_always() {
        assert!(matches!(compile(&Pattern::Value(Value::Undefined)), Check::Always));
        assert!(matches!(compile(&Pattern::Any), Check::Always));
    }

    #[test]
    fn raw_array_value_compiles_to_template() {
        let pattern = Pattern::from(Value::from(vec![1, 2]));
        match compile(&pattern) {
            Check::Array(items) => {
                assert_eq!(items.len(), 2);
                assert!(items.iter().all(|c| matches!(c, Check::Equals(_))));
            }
            other => panic!("expected Array, got {other:?}"),
        }
    }

    #[test]
    fn function_value_compiles_to_predicate() {
        let positive = Function::new("positive", |args| {
            Value::from(args[0].as_f64().is_some_and(|n| n > 0.0))
        });
        match compile(&Pattern::from(Value::from(positive))) {
            Check::Predicate(p) => {
                assert!(p.test(&Value::from(3)));
                assert!(!p.test(&Value::from(-3)));
            }
            other => panic!("expected Predicate, got {other:?}"),
        }
    }

    #[test]
    fn object_with_test_function_is_regex_like() {
        let starts_with_a = Function::new("starts_with_a", |args| {
            Value::from(args[0].as_str().is_some_and(|s| s.starts_with('a')))
        });
        let mut map = Object::new();
        map.insert("test".to_owned(), Value::from(starts_with_a));
        map.insert("flags".to_owned(), Value::from("i"));
        let check = compile(&Pattern::from(Value::Object(map)));
        assert!(matches!(check, Check::Predicate(_)));
        assert!(check.accepts(&Value::from("abc")));
        assert!(!check.accepts(&Value::from("xyz")));
    }

    #[test]
    fn object_with_non_function_test_is_a_template() {
        let value = Value::from(serde_json::json!({ "test": 1 }));
        let check = compile(&Pattern::from(value.clone()));
        assert!(matches!(check, Check::Object(_)));
        assert!(check.accepts(&value));
    }

    #[test]
    fn tokens_keep_their_tags() {
        let check = compile(&Pattern::Array(vec![Pattern::Seek, Pattern::Any, Pattern::Rest]));
        let Check::Array(items) = check else {
            panic!("expected Array");
        };
        assert!(items[0].is_seek());
        assert!(!items[1].is_seek() && !items[1].is_rest());
        assert!(items[2].is_rest());
    }
}
