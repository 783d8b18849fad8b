//! The full comparison report: header, tree body, verdict.

use jcmp_diff::Comparison;

use crate::tree::Renderer;

/// Header line preceding every rendered tree.
pub const REPORT_HEADER: &str = "==== COMPARISON TREE ====";

/// Render the complete report for a comparison result.
///
/// The verdict line is derived by scanning the tree for any mismatch.
pub fn render_report(result: &Comparison, colorize: bool) -> String {
    let renderer = Renderer::new(colorize);
    let p = *renderer.palette();

    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');
    out.push_str(&renderer.render(result));
    if result.has_mismatch() {
        out.push_str(&format!("\n{}❌ Differences found{}\n", p.actual, p.reset));
    } else {
        out.push_str(&format!("\n{}✅ Objects match{}\n", p.ok, p.reset));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcmp_diff::compare;
    use jcmp_types::Value;

    fn report(actual: &str, expected: &str) -> String {
        let actual: Value = actual.parse().unwrap();
        let expected: Value = expected.parse().unwrap();
        render_report(&compare(&actual, &expected), false)
    }

    #[test]
    fn matching_report() {
        let out = report(r#"{"a": 1}"#, r#"{"a": 1}"#);
        assert_eq!(out, "==== COMPARISON TREE ====\n└── a 1\n\n✅ Objects match\n");
    }

    #[test]
    fn diverging_report() {
        let out = report(r#"{"a": 1}"#, r#"{"a": 2}"#);
        assert!(out.starts_with("==== COMPARISON TREE ====\n"));
        assert!(out.ends_with("\n❌ Differences found\n"));
    }

    #[test]
    fn colorized_verdict_is_wrapped() {
        let actual: Value = "1".parse().unwrap();
        let expected: Value = "2".parse().unwrap();
        let out = render_report(&compare(&actual, &expected), true);
        assert!(out.contains("\x1b[31m❌ Differences found\x1b[0m"));
    }
}
