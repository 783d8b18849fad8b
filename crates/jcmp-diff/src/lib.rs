//! Comparison engine for jcmp.
//!
//! Compares two JSON values and produces a diff tree that mirrors their
//! shape, annotating every point of agreement or divergence. The engine is
//! total: every pair of inputs produces a result, and complete divergence is
//! ordinary data, never an error.
//!
//! # Key Types
//!
//! - [`Comparison`] — The diff tree (match / mismatch / object / array nodes)
//! - [`Mismatch`] — The three divergence shapes (type, size, value)
//! - [`ObjectEntry`] / [`KeyTag`] — Per-key children with presence tagging
//! - [`compare`] — The entry point

pub mod compare;
pub mod result;

pub use compare::compare;
pub use result::{Comparison, KeyTag, Mismatch, ObjectEntry};
