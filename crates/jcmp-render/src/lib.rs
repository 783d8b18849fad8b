//! Rendering for jcmp.
//!
//! Turns a diff tree into deterministic, human-readable connector-tree
//! text. Output is byte-identical across runs: object children are stored
//! and traversed in lexicographic key order, and color is an explicit
//! palette handed to the renderer rather than process-global state.
//!
//! # Key Types
//!
//! - [`Renderer`] / [`Palette`] — Tree writer and its color configuration
//! - [`render_report`] — Full report: header line, tree, verdict line

pub mod format;
pub mod palette;
pub mod report;
pub mod tree;

pub use format::{format_compact, format_value};
pub use palette::Palette;
pub use report::{render_report, REPORT_HEADER};
pub use tree::Renderer;
