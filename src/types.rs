//! Reusable type predicates and by-type lookup.
//!
//! The constants here are plain `fn(&Value) -> bool` checks and can be used
//! anywhere a [`Pattern`] is expected. [`lookup`] resolves a type name to a
//! pattern; it is what [`Cases::by_type`](crate::Cases::by_type) hands to case
//! declarations.
//!
//! # Type names
//!
//! | Name                 | Pattern                                        |
//! |----------------------|------------------------------------------------|
//! | `...rest`            | [`Pattern::Rest`]                              |
//! | `...`                | [`Pattern::Seek`]                              |
//! | `any`, `boolean`, …  | The matching constant below                    |
//! | `int`                | Finite number with no fractional part          |
//! | `nat`                | Non-negative `int`                             |
//! | `array<T>`           | Array whose every element matches `T`          |
//! | `bounded<lo;hi>`     | Number in `lo..=hi`                            |
//! | `boundedInt<lo;hi>`  | `int` in `lo..=hi`                             |

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::error::MatchError;
use crate::pattern::{Pattern, Predicate, compile};
use crate::value::Value;

/// A reusable one-argument type check.
pub type TypeCheck = fn(&Value) -> bool;

pub const ANY: TypeCheck = is_any;
/// Any array. See [`array_of`] for typed arrays.
pub const ARRAY: TypeCheck = is_array;
pub const BOOLEAN: TypeCheck = is_boolean;
pub const NULL: TypeCheck = is_null;
pub const UNDEFINED: TypeCheck = is_undefined;
pub const NUMBER: TypeCheck = is_number;
pub const STRING: TypeCheck = is_string;
pub const BIGINT: TypeCheck = is_bigint;
pub const SYMBOL: TypeCheck = is_symbol;
/// Non-null object-like values, arrays included.
pub const OBJECT: TypeCheck = is_object;
pub const FUNCTION: TypeCheck = is_function;
pub const INT: TypeCheck = is_int;
pub const NAT: TypeCheck = is_nat;

pub const REST_TOKEN: &str = "...rest";
pub const SEEK_TOKEN: &str = "...";

fn is_any(_: &Value) -> bool {
    true
}

fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

fn is_undefined(value: &Value) -> bool {
    value.is_undefined()
}

fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

fn is_object(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

fn is_int(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}

fn is_nat(value: &Value) -> bool {
    is_int(value) && value.as_f64().is_some_and(|n| n >= 0.0)
}

/// An array check whose every element must match `element`.
pub fn array_of(element: impl Into<Pattern>) -> Predicate {
    let check = compile(&element.into());
    Predicate::new(move |value| match value {
        Value::Array(items) => items.iter().all(|item| check.accepts(item)),
        _ => false,
    })
}

/// Base type names. Please keep names sorted alphabetically.
const BASE_TYPES: Map<&'static str, TypeCheck> = phf_map! {
    "any" => ANY,
    "array" => ARRAY,
    "bigint" => BIGINT,
    "boolean" => BOOLEAN,
    "function" => FUNCTION,
    "int" => INT,
    "nat" => NAT,
    "null" => NULL,
    "number" => NUMBER,
    "object" => OBJECT,
    "string" => STRING,
    "symbol" => SYMBOL,
    "undefined" => UNDEFINED,
};

/// Resolve a type name to a pattern.
pub fn lookup(name: &str) -> Result<Pattern, MatchError> {
    let name = name.trim();
    match name {
        REST_TOKEN => return Ok(Pattern::Rest),
        SEEK_TOKEN => return Ok(Pattern::Seek),
        _ => {}
    }
    if let Some((base, inner)) = split_parametrized(name)? {
        return parametrized(name, base, inner);
    }
    BASE_TYPES
        .get(name)
        .map(|check| Pattern::from(*check))
        .ok_or_else(|| MatchError::UnknownType(name.to_owned()))
}

/// Split `base<inner>` into its parts. Plain names yield `None`.
fn split_parametrized(name: &str) -> Result<Option<(&str, &str)>, MatchError> {
    let Some(open) = name.find('<') else {
        return Ok(None);
    };
    let Some(inner) = name[open + 1..].strip_suffix('>') else {
        return Err(invalid(name, "missing closing '>'"));
    };
    Ok(Some((name[..open].trim(), inner.trim())))
}

fn parametrized(name: &str, base: &str, inner: &str) -> Result<Pattern, MatchError> {
    match base {
        "array" => {
            let element = lookup(inner)?;
            if matches!(element, Pattern::Rest | Pattern::Seek) {
                return Err(invalid(name, "positional tokens cannot be array elements"));
            }
            Ok(Pattern::Predicate(array_of(element)))
        }
        "bounded" => {
            let (lo, hi) = bounds(name, inner)?;
            Ok(Pattern::predicate(move |value| {
                value.as_f64().is_some_and(|n| lo <= n && n <= hi)
            }))
        }
        "boundedInt" => {
            let (lo, hi) = bounds(name, inner)?;
            Ok(Pattern::predicate(move |value| {
                is_int(value) && value.as_f64().is_some_and(|n| lo <= n && n <= hi)
            }))
        }
        _ => Err(MatchError::UnknownType(name.to_owned())),
    }
}

fn bounds(name: &str, inner: &str) -> Result<(f64, f64), MatchError> {
    let (lo, hi) = inner
        .split(';')
        .map(str::trim)
        .collect_tuple()
        .ok_or_else(|| invalid(name, "expected two bounds separated by ';'"))?;
    let lo = parse_bound(name, lo)?;
    let hi = parse_bound(name, hi)?;
    if lo > hi {
        return Err(invalid(name, "lower bound exceeds upper bound"));
    }
    Ok((lo, hi))
}

fn parse_bound(name: &str, text: &str) -> Result<f64, MatchError> {
    match text.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(invalid(name, format!("bound {text:?} is not a number"))),
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> MatchError {
    MatchError::InvalidTypeParameters {
        name: name.to_owned(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Symbol};
    use serde_json::json;

    fn check(name: &str, value: impl Into<Value>) -> bool {
        compile(&lookup(name).unwrap()).accepts(&value.into())
    }

    #[test]
    fn primitive_predicates() {
        assert!(BOOLEAN(&Value::from(false)));
        assert!(NULL(&Value::Null));
        assert!(!NULL(&Value::Undefined));
        assert!(UNDEFINED(&Value::Undefined));
        assert!(NUMBER(&Value::from(-3)));
        assert!(!NUMBER(&Value::from("3")));
        assert!(STRING(&Value::from("3")));
        assert!(BIGINT(&Value::BigInt(10)));
        assert!(SYMBOL(&Value::from(Symbol::new("s"))));
        assert!(FUNCTION(&Value::from(Function::new("f", |_| Value::Undefined))));
        assert!(ANY(&Value::Undefined));
    }

    #[test]
    fn object_excludes_null_but_includes_arrays() {
        assert!(!OBJECT(&Value::Null));
        assert!(OBJECT(&Value::from(json!({}))));
        assert!(OBJECT(&Value::from(json!([]))));
    }

    #[test]
    fn int_and_nat() {
        assert!(INT(&Value::from(-4)));
        assert!(!INT(&Value::from(1.5)));
        assert!(!INT(&Value::Number(f64::INFINITY)));
        assert!(NAT(&Value::from(0)));
        assert!(!NAT(&Value::from(-1)));
    }

    #[test]
    fn array_of_checks_every_element() {
        let numbers = array_of(NUMBER);
        assert!(numbers.test(&Value::from(vec![1, 2, 3])));
        assert!(numbers.test(&Value::from(Vec::<Value>::new())));
        assert!(!numbers.test(&Value::from(json!([1, "2"]))));
        assert!(!numbers.test(&Value::from(1)));
        assert!(array_of(ANY).test(&Value::from(json!([1, "2"]))));
    }

    #[test]
    fn lookup_tokens() {
        assert!(matches!(lookup("...rest"), Ok(Pattern::Rest)));
        assert!(matches!(lookup("..."), Ok(Pattern::Seek)));
    }

    #[test]
    fn lookup_base_names() {
        assert!(check("number", 1));
        assert!(!check("number", "1"));
        assert!(check(" string ", "1"));
        assert!(check("int", 7));
    }

    #[test]
    fn lookup_unknown_name() {
        assert_eq!(
            lookup("float").unwrap_err(),
            MatchError::UnknownType("float".to_owned())
        );
        assert!(matches!(lookup("tuple<int>"), Err(MatchError::UnknownType(_))));
    }

    #[test]
    fn lookup_typed_arrays() {
        assert!(check("array<int>", vec![1, 2]));
        assert!(!check("array<int>", vec![1.5]));
        assert!(check("array<array<string>>", Value::from(json!([["a"], []]))));
        assert!(matches!(
            lookup("array<...>"),
            Err(MatchError::InvalidTypeParameters { .. })
        ));
    }

    #[test]
    fn lookup_bounded() {
        assert!(check("bounded<0;1>", 0.5));
        assert!(!check("bounded<0;1>", 1.5));
        assert!(check("boundedInt<1;5>", 5));
        assert!(!check("boundedInt<1;5>", 2.5));
        assert!(!check("boundedInt<1;5>", 6));
    }

    #[test]
    fn lookup_bounded_errors() {
        for name in ["bounded<1>", "bounded<a;2>", "bounded<3;1>", "bounded<1;2", "boundedInt<NaN;1>"] {
            assert!(
                matches!(lookup(name), Err(MatchError::InvalidTypeParameters { .. })),
                "expected invalid parameters: {name}"
            );
        }
    }
}
