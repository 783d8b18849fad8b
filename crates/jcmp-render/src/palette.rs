//! Color configuration for the renderer.

/// ANSI escape prefixes for each output category.
///
/// A palette is plain data passed into the renderer; there is no global
/// color switch. [`Palette::PLAIN`] carries empty strings throughout, so
/// colorized and plain rendering share a single code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Expected-side labels and values.
    pub expected: &'static str,
    /// Actual-side labels and values, and mismatched keys.
    pub actual: &'static str,
    /// Classification notes (type-mismatch explanations).
    pub note: &'static str,
    /// Keys whose values matched.
    pub key: &'static str,
    /// Keys introducing a nested object or array.
    pub structure: &'static str,
    /// Array index labels.
    pub index: &'static str,
    /// The success marker on matched array items.
    pub ok: &'static str,
    /// Reset sequence closing every colored span.
    pub reset: &'static str,
}

impl Palette {
    /// The standard ANSI palette.
    pub const ANSI: Palette = Palette {
        expected: "\x1b[36m",
        actual: "\x1b[31m",
        note: "\x1b[33m",
        key: "\x1b[33m",
        structure: "\x1b[34m",
        index: "\x1b[90m",
        ok: "\x1b[32m",
        reset: "\x1b[0m",
    };

    /// The colorless palette.
    pub const PLAIN: Palette = Palette {
        expected: "",
        actual: "",
        note: "",
        key: "",
        structure: "",
        index: "",
        ok: "",
        reset: "",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_empty() {
        let p = Palette::PLAIN;
        assert!(p.expected.is_empty());
        assert!(p.actual.is_empty());
        assert!(p.reset.is_empty());
    }

    #[test]
    fn ansi_palette_resets() {
        assert_eq!(Palette::ANSI.reset, "\x1b[0m");
        assert_ne!(Palette::ANSI.expected, Palette::ANSI.actual);
    }
}
