//! Geometric search over positioned words.
//!
//! This module provides the coordinate-based lookup the field extractors try
//! before falling back to text matching:
//! - Label matching by regular expression
//! - Nearest right-neighbor selection across all label occurrences
//! - Configurable horizontal gap and vertical tolerance
//!
//! ## Example
//!
//! ```
//! use actas_oxide::layout::PositionedWord;
//! use actas_oxide::search::{locate_right_of, LocateOptions};
//! use regex::RegexBuilder;
//!
//! let words = vec![
//!     PositionedWord::new("Grado(5)", 50.0, 60.0, 100.0, 140.0),
//!     PositionedWord::new("1", 50.0, 60.0, 150.0, 160.0),
//! ];
//! let label = RegexBuilder::new(r"\(5\)").case_insensitive(true).build().unwrap();
//! let options = LocateOptions::default().with_vertical_tolerance(8.0);
//! assert_eq!(locate_right_of(&words, &label, &options), "1");
//! ```

mod locator;

pub use locator::{
    find_right_of, locate_right_of, LocateOptions, LocatedValue, DEFAULT_MAX_GAP,
    DEFAULT_Y_TOLERANCE,
};
