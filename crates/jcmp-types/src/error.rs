//! Error types for value parsing.

/// Errors that can occur while turning external text into a [`crate::Value`].
///
/// The comparison core itself is total and never fails; all fallible paths
/// end at this boundary.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input was not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input nested deeper than the supported limit.
    #[error("input nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// A number in the input has no double-precision representation.
    #[error("unrepresentable number: {0}")]
    UnrepresentableNumber(String),
}
