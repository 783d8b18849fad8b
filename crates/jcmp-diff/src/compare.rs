//! The comparison algorithm.
//!
//! Type checks are strict: there is no coercion between string, number, and
//! boolean anywhere, so `30` never equals `"30"`. Objects are compared over
//! the union of their key sets; arrays positionally, and only when the
//! lengths already agree.

use std::collections::BTreeMap;

use jcmp_types::Value;

use crate::result::{Comparison, KeyTag, Mismatch, ObjectEntry};

/// Compare an actual value against an expected value.
///
/// Total over all inputs. Recursion depth is bounded by input nesting,
/// which the parse boundary caps at [`jcmp_types::MAX_DEPTH`].
pub fn compare(actual: &Value, expected: &Value) -> Comparison {
    if actual.kind() != expected.kind() {
        return Comparison::Mismatch(Mismatch::Type {
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => compare_objects(actual, expected),
        (Value::Array(actual), Value::Array(expected)) => compare_arrays(actual, expected),
        _ if actual == expected => Comparison::Match {
            value: actual.clone(),
        },
        _ => Comparison::Mismatch(Mismatch::Value {
            expected: expected.clone(),
            actual: actual.clone(),
        }),
    }
}

/// Compare two objects over the union of their keys.
///
/// Keys present on only one side become tagged mismatch children whose
/// absent side is null; keys present on both recurse.
fn compare_objects(
    actual: &BTreeMap<String, Value>,
    expected: &BTreeMap<String, Value>,
) -> Comparison {
    let mut children = BTreeMap::new();

    for (key, expected_val) in expected {
        let entry = match actual.get(key) {
            Some(actual_val) => ObjectEntry {
                tag: KeyTag::Present,
                result: compare(actual_val, expected_val),
            },
            None => ObjectEntry {
                tag: KeyTag::Missing,
                result: Comparison::Mismatch(Mismatch::Value {
                    expected: expected_val.clone(),
                    actual: Value::Null,
                }),
            },
        };
        children.insert(key.clone(), entry);
    }

    for (key, actual_val) in actual {
        if !expected.contains_key(key) {
            children.insert(
                key.clone(),
                ObjectEntry {
                    tag: KeyTag::Extra,
                    result: Comparison::Mismatch(Mismatch::Value {
                        expected: Value::Null,
                        actual: actual_val.clone(),
                    }),
                },
            );
        }
    }

    Comparison::Object { children }
}

/// Compare two arrays positionally.
///
/// Unequal lengths short-circuit to a single size mismatch for the whole
/// array; index semantics are ambiguous under insertion or deletion, so no
/// per-element alignment is attempted.
fn compare_arrays(actual: &[Value], expected: &[Value]) -> Comparison {
    if actual.len() != expected.len() {
        return Comparison::Mismatch(Mismatch::Size {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Comparison::Array {
        items: actual
            .iter()
            .zip(expected)
            .map(|(a, e)| compare(a, e))
            .collect(),
    }
}
