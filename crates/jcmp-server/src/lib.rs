//! HTTP server for jcmp.
//!
//! Exposes the comparison engine over HTTP: `POST /compare` takes
//! `{"actual": <json>, "expected": <json>}` and responds with the rendered
//! comparison tree as plain text. Each request is an independent
//! comparison; handlers share only the immutable server config.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::CompareRequest;
pub use server::CompareServer;
