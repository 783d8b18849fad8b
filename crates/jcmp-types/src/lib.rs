//! Foundation types for jcmp.
//!
//! This crate provides the JSON value model used throughout the jcmp
//! workspace. Every other jcmp crate depends on `jcmp-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Closed tagged union over JSON data (float64 number semantics)
//! - [`ValueKind`] — The six-way type taxonomy used in diagnostics
//! - [`ParseError`] — Failures turning external text into a [`Value`]

pub mod error;
pub mod value;

pub use error::ParseError;
pub use value::{Value, ValueKind, MAX_DEPTH};
