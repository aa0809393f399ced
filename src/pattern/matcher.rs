//! Matcher: evaluate a compiled [`Check`] against a [`Value`].
//!
//! Array templates consume a working copy of the candidate array from the
//! front, one value per ordinary entry. `Rest` absorbs whatever remains and
//! `Seek` turns the next entry into a forward scan.

use std::collections::VecDeque;

use crate::value::Value;

use super::compiler::Check;

impl Check {
    /// Test `value` against this check. Never runs handlers and never mutates
    /// the value.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Check::Always => true,
            Check::Equals(expected) => expected.strict_equals(value),
            Check::Predicate(predicate) => predicate.test(value),
            Check::Test(tester) => tester.test(value),
            Check::Array(checks) => match value {
                Value::Array(items) => match_array(checks, items),
                _ => false,
            },
            Check::Object(entries) => match value {
                Value::Object(_) => match_object(entries, value),
                _ => false,
            },
            // Positional tokens are markers, not checks.
            Check::Rest | Check::Seek => false,
        }
    }
}

// ─── Array templates ─────────────────────────────────────────────────────────

/// Run the array cursor over `items`.
///
/// A single left-to-right pass over `checks`:
///
/// - `Rest` clears the working copy and ends the pass.
/// - `Seek` consumes nothing; it puts the next ordinary entry in seek mode.
/// - An ordinary entry is only evaluated while values remain. In seek mode it
///   discards values from the front until one passes (failing if none does);
///   otherwise it takes exactly one value, which must pass.
///
/// The match succeeds only if nothing failed and the working copy is empty,
/// so an array longer than its template never matches without `Rest`.
/// The converse does not hold: once the working copy is exhausted, remaining
/// entries are skipped, so `[1, 2, 3, 4]` accepts `[1, 2]` and `[1]` accepts `[]`.
pub fn match_array(checks: &[Check], items: &[Value]) -> bool {
    let mut remaining: VecDeque<&Value> = items.iter().collect();
    let mut seeking = false;

    for check in checks {
        if check.is_rest() {
            remaining.clear();
            break;
        }
        if check.is_seek() {
            seeking = true;
            continue;
        }

        if remaining.is_empty() {
            continue;
        }

        if seeking {
            seeking = false;
            if !seek(check, &mut remaining) {
                return false;
            }
        } else if let Some(value) = remaining.pop_front()
            && !check.accepts(value)
        {
            return false;
        }
    }

    remaining.is_empty()
}

/// Discard values from the front until one satisfies `check`. The matching
/// value is consumed too. Terminates because every step shrinks `remaining`.
fn seek(check: &Check, remaining: &mut VecDeque<&Value>) -> bool {
    while let Some(value) = remaining.pop_front() {
        if check.accepts(value) {
            return true;
        }
    }
    false
}

// ─── Object templates ────────────────────────────────────────────────────────

/// Every declared key must satisfy its check; missing properties read as
/// `undefined` and undeclared properties are never examined.
pub fn match_object(entries: &[(String, Check)], value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    let missing = Value::Undefined;
    entries
        .iter()
        .all(|(key, check)| check.accepts(map.get(key).unwrap_or(&missing)))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
