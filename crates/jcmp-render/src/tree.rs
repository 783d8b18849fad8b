//! The connector-tree writer.
//!
//! Walks a diff tree and emits one line per visible node: `├── ` before a
//! non-last child, `└── ` before the last, with the prefix growing by one
//! four-column step per nesting level. Mismatch detail lines sit a further
//! eight columns under their label. Matches are inlined into their parent
//! line; they only get a line of their own at array positions, where the
//! index label and a success marker are shown.
//!
//! Object children are traversed in lexicographic key order, which the diff
//! tree already guarantees, so equal trees always render byte-identically.

use jcmp_diff::{Comparison, Mismatch};
use jcmp_types::ValueKind;

use crate::format::{format_compact, format_value};
use crate::palette::Palette;

const DETAIL_INDENT: &str = "        ";

/// Renders diff trees as indented connector-tree text.
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    /// A renderer with the ANSI palette when `colorize` is set, the plain
    /// palette otherwise.
    pub fn new(colorize: bool) -> Self {
        Self::with_palette(if colorize {
            Palette::ANSI
        } else {
            Palette::PLAIN
        })
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render the tree body for a comparison result.
    ///
    /// A lone `Match` at the root renders as nothing: there is no parent
    /// line to inline it into, and the verdict line carries the outcome.
    pub fn render(&self, result: &Comparison) -> String {
        let mut out = String::new();
        self.render_node(&mut out, result, "");
        out
    }

    fn render_node(&self, out: &mut String, node: &Comparison, prefix: &str) {
        match node {
            Comparison::Match { .. } => {}
            Comparison::Mismatch(mismatch) => self.render_mismatch(out, mismatch, prefix),
            Comparison::Object { children } => {
                let p = &self.palette;
                let last = children.len().saturating_sub(1);
                for (i, (key, entry)) in children.iter().enumerate() {
                    let (connector, extender) = branch(i == last);
                    let child_prefix = format!("{prefix}{extender}");
                    match &entry.result {
                        Comparison::Match { value } => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}{key}{} {}\n",
                                p.key,
                                p.reset,
                                format_value(value)
                            ));
                        }
                        Comparison::Mismatch(mismatch) => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}{key}{}\n",
                                p.actual, p.reset
                            ));
                            self.render_mismatch(out, mismatch, &child_prefix);
                        }
                        nested => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}{key}{}\n",
                                p.structure, p.reset
                            ));
                            self.render_node(out, nested, &child_prefix);
                        }
                    }
                }
            }
            Comparison::Array { items } => {
                let p = &self.palette;
                let last = items.len().saturating_sub(1);
                for (i, item) in items.iter().enumerate() {
                    let (connector, extender) = branch(i == last);
                    let child_prefix = format!("{prefix}{extender}");
                    match item {
                        Comparison::Match { value } => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}[{i}]:{} {}✓{} {}\n",
                                p.index,
                                p.reset,
                                p.ok,
                                p.reset,
                                format_value(value)
                            ));
                        }
                        Comparison::Mismatch(mismatch) => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}[{i}]:{}\n",
                                p.actual, p.reset
                            ));
                            self.render_mismatch(out, mismatch, &child_prefix);
                        }
                        nested => {
                            out.push_str(&format!(
                                "{prefix}{connector}{}[{i}]:{}\n",
                                p.index, p.reset
                            ));
                            self.render_node(out, nested, &child_prefix);
                        }
                    }
                }
            }
        }
    }

    fn render_mismatch(&self, out: &mut String, mismatch: &Mismatch, prefix: &str) {
        let p = &self.palette;
        match mismatch {
            Mismatch::Type { expected, actual } => {
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Expected:{} <{}>\n",
                    p.expected,
                    p.reset,
                    expected.kind()
                ));
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Actual:{}   {{{} {}}}\n",
                    p.actual,
                    p.reset,
                    actual.kind().as_str().to_uppercase(),
                    format_compact(actual)
                ));
                if expected.kind() == ValueKind::Null {
                    out.push_str(&format!(
                        "{prefix}{DETAIL_INDENT}{}Expected is nil, actual is not{}\n",
                        p.note, p.reset
                    ));
                } else {
                    out.push_str(&format!(
                        "{prefix}{DETAIL_INDENT}{}Type mismatch: expected {}, got {}{}\n",
                        p.note,
                        expected.kind(),
                        actual.kind(),
                        p.reset
                    ));
                }
            }
            Mismatch::Size { expected, actual } => {
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Expected size:{} {expected}\n",
                    p.expected, p.reset
                ));
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Actual size:{}   {actual}\n",
                    p.actual, p.reset
                ));
            }
            Mismatch::Value { expected, actual } => {
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Expected:{} {}\n",
                    p.expected,
                    p.reset,
                    format_value(expected)
                ));
                out.push_str(&format!(
                    "{prefix}{DETAIL_INDENT}{}Actual:{}   {}\n",
                    p.actual,
                    p.reset,
                    format_value(actual)
                ));
            }
        }
    }
}

fn branch(is_last: bool) -> (&'static str, &'static str) {
    if is_last {
        ("└── ", "    ")
    } else {
        ("├── ", "│   ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcmp_diff::compare;
    use jcmp_types::Value;

    fn render_plain(actual: &str, expected: &str) -> String {
        let actual: Value = actual.parse().unwrap();
        let expected: Value = expected.parse().unwrap();
        Renderer::new(false).render(&compare(&actual, &expected))
    }

    #[test]
    fn matching_scalar_root_renders_nothing() {
        assert_eq!(render_plain("42", "42"), "");
    }

    #[test]
    fn value_mismatch_under_a_key() {
        let out = render_plain(
            r#"{"name": "bob", "age": 30}"#,
            r#"{"name": "alice", "age": 30}"#,
        );
        assert_eq!(
            out,
            "├── age 30\n\
             └── name\n\
             \x20           Expected: alice\n\
             \x20           Actual:   bob\n"
        );
    }

    #[test]
    fn type_mismatch_at_root() {
        let out = render_plain("30", "\"30\"");
        assert_eq!(
            out,
            "        Expected: <string>\n\
             \x20       Actual:   {NUMBER 30}\n\
             \x20       Type mismatch: expected string, got number\n"
        );
    }

    #[test]
    fn null_expected_note() {
        let out = render_plain("30", "null");
        assert!(out.contains("Expected: <nil>"));
        assert!(out.contains("Expected is nil, actual is not"));
    }

    #[test]
    fn size_mismatch_lines() {
        let out = render_plain("[1, 2]", "[1, 2, 3]");
        assert_eq!(
            out,
            "        Expected size: 3\n\
             \x20       Actual size:   2\n"
        );
    }

    #[test]
    fn matched_array_items_show_success_markers() {
        let out = render_plain("[1, 2]", "[1, 2]");
        assert_eq!(out, "├── [0]: ✓ 1\n└── [1]: ✓ 2\n");
    }

    #[test]
    fn swapped_array_items_render_two_value_mismatches() {
        let out = render_plain("[1, 2]", "[2, 1]");
        assert_eq!(
            out,
            "├── [0]:\n\
             │           Expected: 2\n\
             │           Actual:   1\n\
             └── [1]:\n\
             \x20           Expected: 1\n\
             \x20           Actual:   2\n"
        );
    }

    #[test]
    fn nested_object_indents_one_level_per_depth() {
        let out = render_plain(
            r#"{"user": {"name": "bob"}}"#,
            r#"{"user": {"name": "alice"}}"#,
        );
        assert_eq!(
            out,
            "└── user\n\
             \x20   └── name\n\
             \x20               Expected: alice\n\
             \x20               Actual:   bob\n"
        );
    }

    #[test]
    fn missing_and_extra_keys_display_the_bare_key() {
        let out = render_plain(r#"{"a": 1, "x": 9}"#, r#"{"a": 1, "b": 2}"#);
        assert!(out.contains("├── b\n"));
        assert!(out.contains("└── x\n"));
        assert!(out.contains("Expected: 2"));
        assert!(out.contains("Actual:   <nil>"));
        assert!(out.contains("Expected: <nil>"));
        assert!(out.contains("Actual:   9"));
    }

    #[test]
    fn rendering_is_deterministic_across_key_orderings() {
        let a1: Value = r#"{"b": 1, "a": 2, "c": 3}"#.parse().unwrap();
        let a2: Value = r#"{"c": 3, "a": 2, "b": 1}"#.parse().unwrap();
        let expected: Value = r#"{"a": 2, "b": 1, "c": 4}"#.parse().unwrap();

        let renderer = Renderer::new(false);
        let first = renderer.render(&compare(&a1, &expected));
        let second = renderer.render(&compare(&a2, &expected));
        assert_eq!(first, second);
        assert_eq!(first, renderer.render(&compare(&a1, &expected)));
    }

    #[test]
    fn colorized_output_wraps_labels_in_ansi() {
        let actual: Value = r#"{"name": "bob"}"#.parse().unwrap();
        let expected: Value = r#"{"name": "alice"}"#.parse().unwrap();
        let out = Renderer::new(true).render(&compare(&actual, &expected));
        assert!(out.contains("\x1b[36mExpected:\x1b[0m alice"));
        assert!(out.contains("\x1b[31mActual:\x1b[0m   bob"));
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let out = render_plain(r#"{"a": [1]}"#, r#"{"a": [2]}"#);
        assert!(!out.contains('\x1b'));
    }
}
