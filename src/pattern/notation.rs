//! JSON notation for patterns.
//!
//! Plain JSON reads as raw values, so arrays and objects become templates and
//! scalars compare by strict equality. Single-key objects whose key starts
//! with `$` are directives:
//!
//! - `{"$type": "name"}` resolves through [`types::lookup`](crate::types::lookup),
//!   so `{"$type": "...rest"}` and `{"$type": "..."}` are the positional tokens.
//! - `{"$regex": "source"}` compiles a regular expression.
//! - `{"$any": null}` is a hole.

use regex::Regex;
use serde_json::Value as Json;

use crate::error::MatchError;
use crate::types;
use crate::value::Value;

use super::ast::Pattern;

/// Build a [`Pattern`] from its JSON notation.
pub fn from_json(json: &Json) -> Result<Pattern, MatchError> {
    match json {
        Json::Array(items) => Ok(Pattern::Array(
            items.iter().map(from_json).collect::<Result<_, _>>()?,
        )),
        Json::Object(map) => {
            if let Some((key, arg)) = map.iter().next()
                && map.len() == 1
                && key.starts_with('$')
            {
                return directive(key, arg);
            }
            Ok(Pattern::Object(
                map.iter()
                    .map(|(key, value)| Ok((key.clone(), from_json(value)?)))
                    .collect::<Result<_, MatchError>>()?,
            ))
        }
        scalar => Ok(Pattern::Value(Value::from(scalar.clone()))),
    }
}

fn directive(key: &str, arg: &Json) -> Result<Pattern, MatchError> {
    match key {
        "$type" => {
            let name = arg
                .as_str()
                .ok_or_else(|| MatchError::InvalidNotation("$type expects a string".into()))?;
            types::lookup(name)
        }
        "$regex" => {
            let source = arg
                .as_str()
                .ok_or_else(|| MatchError::InvalidNotation("$regex expects a string".into()))?;
            Ok(Pattern::from(Regex::new(source)?))
        }
        "$any" => Ok(Pattern::Any),
        other => Err(MatchError::InvalidNotation(format!(
            "unknown directive {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;
    use serde_json::json;

    fn accepts(pattern: Json, value: Json) -> bool {
        compile(&from_json(&pattern).unwrap()).accepts(&Value::from(value))
    }

    #[test]
    fn scalars_are_raw_values() {
        assert!(accepts(json!(2), json!(2)));
        assert!(!accepts(json!(2), json!("2")));
        assert!(accepts(json!(null), json!(null)));
    }

    #[test]
    fn type_directive() {
        assert!(accepts(json!({ "$type": "number" }), json!(-3)));
        assert!(!accepts(json!({ "$type": "number" }), json!("x")));
    }

    #[test]
    fn positional_tokens_inside_arrays() {
        let rest = json!([1, 2, 3, { "$type": "...rest" }]);
        assert!(accepts(rest, json!([1, 2, 3, 4, 5])));
        let seek = json!([1, 2, { "$type": "..." }, 5]);
        assert!(accepts(seek, json!([1, 2, 3, 4, 5])));
    }

    #[test]
    fn holes() {
        assert!(accepts(json!([1, { "$any": null }, 3]), json!([1, "x", 3])));
    }

    #[test]
    fn regex_directive() {
        assert!(accepts(json!({ "$regex": "^ab" }), json!("abc")));
        assert!(matches!(
            from_json(&json!({ "$regex": "(" })),
            Err(MatchError::InvalidRegex(_))
        ));
    }

    #[test]
    fn object_templates_recurse() {
        let pattern = json!({ "test": [{ "$type": "number" }], "foo": { "bar": "quux" } });
        assert!(accepts(
            pattern,
            json!({ "test": [1], "foo": { "bar": "quux" }, "extra": true })
        ));
    }

    #[test]
    fn multi_key_dollar_objects_are_templates() {
        let pattern = json!({ "$type": "number", "other": 1 });
        assert!(accepts(pattern, json!({ "$type": "number", "other": 1 })));
    }

    #[test]
    fn bad_directives() {
        assert!(matches!(
            from_json(&json!({ "$nope": 1 })),
            Err(MatchError::InvalidNotation(_))
        ));
        assert!(matches!(
            from_json(&json!({ "$type": 1 })),
            Err(MatchError::InvalidNotation(_))
        ));
        assert!(matches!(
            from_json(&json!({ "$type": "float" })),
            Err(MatchError::UnknownType(_))
        ));
    }
}
