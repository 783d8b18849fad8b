//! The diff tree produced by a comparison.
//!
//! Each variant of [`Comparison`] is a distinct node shape, so illegal
//! states (a node carrying both object children and array items, say) are
//! unrepresentable.

use std::collections::BTreeMap;

use jcmp_types::Value;

/// The result of comparing an actual value against an expected value.
///
/// The tree mirrors the shape of the inputs: structural nodes (`Object`,
/// `Array`) appear only where both sides had the same structural kind, and
/// every divergence bottoms out in a [`Mismatch`] leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    /// Actual and expected were equal.
    Match { value: Value },
    /// Actual and expected diverged at this point.
    Mismatch(Mismatch),
    /// Both sides were objects; one child per key in the union of key sets.
    Object {
        children: BTreeMap<String, ObjectEntry>,
    },
    /// Both sides were equal-length arrays; one item per position.
    Array { items: Vec<Comparison> },
}

impl Comparison {
    /// Returns `true` if this node or any descendant is a mismatch.
    ///
    /// Short-circuits on the first mismatch found.
    pub fn has_mismatch(&self) -> bool {
        match self {
            Comparison::Match { .. } => false,
            Comparison::Mismatch(_) => true,
            Comparison::Object { children } => {
                children.values().any(|entry| entry.result.has_mismatch())
            }
            Comparison::Array { items } => items.iter().any(Comparison::has_mismatch),
        }
    }

    /// Returns `true` if the whole tree is free of mismatches.
    pub fn is_match(&self) -> bool {
        !self.has_mismatch()
    }
}

/// A single point of divergence.
#[derive(Clone, Debug, PartialEq)]
pub enum Mismatch {
    /// The two sides had different kinds. The raw values are carried for
    /// display; their kinds are derived on demand.
    Type { expected: Value, actual: Value },
    /// Both sides were arrays but with different element counts. No
    /// per-element detail is recorded.
    Size { expected: usize, actual: usize },
    /// Both sides had the same kind but unequal content.
    Value { expected: Value, actual: Value },
}

/// An object child: the comparison under a key, tagged with where the key
/// was present.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectEntry {
    pub tag: KeyTag,
    pub result: Comparison,
}

/// Which side(s) of the comparison an object key appeared on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTag {
    /// Present in both actual and expected.
    Present,
    /// Present only in expected.
    Missing,
    /// Present only in actual.
    Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch() -> Comparison {
        Comparison::Mismatch(Mismatch::Value {
            expected: Value::Number(1.0),
            actual: Value::Number(2.0),
        })
    }

    #[test]
    fn match_leaf_has_no_mismatch() {
        let node = Comparison::Match { value: Value::Null };
        assert!(!node.has_mismatch());
        assert!(node.is_match());
    }

    #[test]
    fn mismatch_leaf_is_detected() {
        assert!(mismatch().has_mismatch());
    }

    #[test]
    fn mismatch_found_through_object_children() {
        let mut children = BTreeMap::new();
        children.insert(
            "ok".to_string(),
            ObjectEntry {
                tag: KeyTag::Present,
                result: Comparison::Match {
                    value: Value::Bool(true),
                },
            },
        );
        children.insert(
            "bad".to_string(),
            ObjectEntry {
                tag: KeyTag::Present,
                result: mismatch(),
            },
        );
        let node = Comparison::Object { children };
        assert!(node.has_mismatch());
    }

    #[test]
    fn mismatch_found_through_array_items() {
        let node = Comparison::Array {
            items: vec![
                Comparison::Match {
                    value: Value::Number(1.0),
                },
                Comparison::Array {
                    items: vec![mismatch()],
                },
            ],
        };
        assert!(node.has_mismatch());
    }

    #[test]
    fn all_match_tree_scans_clean() {
        let node = Comparison::Array {
            items: vec![
                Comparison::Match {
                    value: Value::Number(1.0),
                },
                Comparison::Object {
                    children: BTreeMap::new(),
                },
            ],
        };
        assert!(!node.has_mismatch());
    }
}
