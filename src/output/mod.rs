//! Rendering of extracted rectangles
//!
//! The default layout is byte-compatible with what existing level
//! tooling parses; the serde-based layouts are available for new consumers.

mod json_writer;

pub use json_writer::{render, write_to, OutputFormat};
