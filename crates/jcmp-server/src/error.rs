use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use jcmp_types::ParseError;

/// Server lifecycle failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Request rejections surfaced to HTTP clients as 4xx responses.
///
/// The comparison core only runs once both fields have parsed, so it never
/// sees invalid input.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid '{field}' JSON: {source}")]
    InvalidField {
        field: &'static str,
        source: ParseError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_names_the_field() {
        let err = ApiError::InvalidField {
            field: "actual",
            source: "nope".parse::<jcmp_types::Value>().unwrap_err(),
        };
        assert!(err.to_string().starts_with("invalid 'actual' JSON"));
    }
}
