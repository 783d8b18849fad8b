//! The JSON value model.
//!
//! [`Value`] is a closed tagged union over JSON data. Numbers carry
//! double-precision float semantics throughout: `1` and `1.0` parse to the
//! same value and compare equal. Objects are `BTreeMap`s, so key iteration
//! is lexicographic and carries no trace of source insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Maximum nesting depth accepted when converting parsed JSON.
///
/// Comparison and rendering recurse over the value tree, so depth is capped
/// here, at the fallible parse boundary, keeping the downstream traversals
/// total.
pub const MAX_DEPTH: usize = 128;

/// A parsed JSON-like value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// The kind of this value in the diagnostic taxonomy.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a `serde_json` value, enforcing the [`MAX_DEPTH`] limit.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ParseError> {
        Self::from_json_at(json, 0)
    }

    fn from_json_at(json: &serde_json::Value, depth: usize) -> Result<Self, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        let value = match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => return Err(ParseError::UnrepresentableNumber(n.to_string())),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Self::from_json_at(item, depth + 1))
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), Self::from_json_at(v, depth + 1)?)))
                    .collect::<Result<_, ParseError>>()?,
            ),
        };
        Ok(value)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json(&json)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = ParseError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

/// The six-way type taxonomy reported in type-mismatch diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The display name of this kind. Null reports as `nil`.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "nil",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
