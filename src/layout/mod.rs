//! Word and line model for the page header.
//!
//! - [`PositionedWord`]: one token with its bounding box
//! - [`split_run`]: multi-word provider runs into tokens
//! - [`group_lines`]: vertical-proximity line reconstruction

pub mod line;
pub mod word;

// Re-export main types
pub use line::{group_lines, reconstruct_text, Line, DEFAULT_LINE_TOLERANCE};
pub use word::{split_run, PositionedWord};
