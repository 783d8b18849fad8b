use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, value::RawValue};

use jcmp_diff::compare;
use jcmp_render::render_report;
use jcmp_types::Value;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Request body for the comparison endpoint.
///
/// Both fields stay raw so each can be parsed into a [`Value`]
/// independently, with per-field rejections.
#[derive(Deserialize)]
pub struct CompareRequest {
    pub actual: Box<RawValue>,
    pub expected: Box<RawValue>,
}

/// Comparison handler: parses both sides, compares, renders the report.
pub async fn compare_handler(
    State(config): State<ServerConfig>,
    Json(req): Json<CompareRequest>,
) -> Result<String, ApiError> {
    let actual = parse_field("actual", &req.actual)?;
    let expected = parse_field("expected", &req.expected)?;

    let comparison = compare(&actual, &expected);
    tracing::debug!(mismatch = comparison.has_mismatch(), "comparison served");
    Ok(render_report(&comparison, config.colorize))
}

fn parse_field(field: &'static str, raw: &RawValue) -> Result<Value, ApiError> {
    raw.get()
        .parse()
        .map_err(|source| ApiError::InvalidField { field, source })
}

/// Usage text for the API root.
pub async fn index_handler() -> String {
    "jcmp comparison API\n\
     ===================\n\
     \n\
     POST /compare\n\
     \n\
     Request body:\n\
     {\"actual\": <json>, \"expected\": <json>}\n\
     \n\
     Response: plain-text comparison tree plus a verdict line.\n"
        .to_string()
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "jcmp-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
