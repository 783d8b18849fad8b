//! File-vs-literal input disambiguation.

use std::fs;

use anyhow::Context;

use jcmp_types::Value;

/// Load a JSON value from a CLI argument.
///
/// Arguments starting with `/`, `./`, or `../` are read as files; anything
/// else is parsed as an inline JSON literal.
pub fn load_value(input: &str) -> anyhow::Result<Value> {
    if looks_like_path(input) {
        let text = fs::read_to_string(input)
            .with_context(|| format!("could not read file {input}"))?;
        return text
            .parse()
            .with_context(|| format!("file {input} does not contain valid JSON"));
    }

    input.parse().context(
        "input is not valid JSON; if you meant a file path, start it with /, ./, or ../",
    )
}

fn looks_like_path(input: &str) -> bool {
    input.starts_with('/') || input.starts_with("./") || input.starts_with("../")
}
