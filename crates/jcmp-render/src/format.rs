//! Display formatting for values.

use jcmp_types::Value;

/// Format a value for an `Expected:`/`Actual:` line or an inline match.
///
/// Null renders as a literal placeholder, integral numbers without a
/// decimal point, strings bare (no quotes).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => format_compact(value),
    }
}

/// Compact one-line form, used for the actual side of a type mismatch.
pub fn format_compact(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_compact).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("{key}: {}", format_compact(val)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

// Largest f64 range where every integer is exactly representable.
const EXACT_INT_BOUND: f64 = 9_007_199_254_740_992.0; // 2^53

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < EXACT_INT_BOUND {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_placeholder() {
        assert_eq!(format_value(&Value::Null), "<nil>");
        assert_eq!(format_compact(&Value::Null), "nil");
    }

    #[test]
    fn integral_numbers_drop_the_point() {
        assert_eq!(format_value(&Value::Number(30.0)), "30");
        assert_eq!(format_value(&Value::Number(-4.0)), "-4");
    }

    #[test]
    fn fractional_numbers_keep_the_point() {
        assert_eq!(format_value(&Value::Number(1.5)), "1.5");
        assert_eq!(format_value(&Value::Number(1.0000001)), "1.0000001");
    }

    #[test]
    fn strings_render_bare() {
        assert_eq!(format_value(&Value::String("alice".into())), "alice");
    }

    #[test]
    fn compact_array_and_object() {
        let value: Value = r#"{"b": [1, 2], "a": "x"}"#.parse().unwrap();
        assert_eq!(format_compact(&value), "{a: x, b: [1, 2]}");
    }
}
