//! Geometric right-of-label lookup.
//!
//! Finds the value printed to the right of a label using only word
//! coordinates, so it works regardless of where the label sits on the page.

use crate::layout::PositionedWord;
use regex::Regex;

/// Default maximum horizontal gap between a label and its value.
pub const DEFAULT_MAX_GAP: f32 = 200.0;

/// Default vertical tolerance between label and value centers.
pub const DEFAULT_Y_TOLERANCE: f32 = 4.0;

/// Options for a right-of-label lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocateOptions {
    /// A candidate's gap (`x0 - label.x1`) must be strictly below this
    pub max_horizontal_gap: f32,
    /// A candidate's vertical center may differ from the label's by at most this
    pub vertical_tolerance: f32,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            max_horizontal_gap: DEFAULT_MAX_GAP,
            vertical_tolerance: DEFAULT_Y_TOLERANCE,
        }
    }
}

impl LocateOptions {
    /// Create options with explicit gap and tolerance.
    pub fn new(max_horizontal_gap: f32, vertical_tolerance: f32) -> Self {
        Self {
            max_horizontal_gap,
            vertical_tolerance,
        }
    }

    /// Set the maximum horizontal gap.
    pub fn with_max_gap(mut self, gap: f32) -> Self {
        self.max_horizontal_gap = gap;
        self
    }

    /// Set the vertical tolerance.
    pub fn with_vertical_tolerance(mut self, tolerance: f32) -> Self {
        self.vertical_tolerance = tolerance;
        self
    }
}

/// A located value with the geometry that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedValue<'a> {
    /// The label word that anchored the match
    pub label: &'a PositionedWord,
    /// The value word to its right
    pub value: &'a PositionedWord,
    /// Horizontal gap between them
    pub gap: f32,
}

/// Find the nearest right-neighbor of any word matching `label`.
///
/// Every word whose text matches `label` is a label candidate. For each one,
/// words on the same line (centers within the vertical tolerance) that start
/// strictly right of the label and closer than the maximum gap are
/// considered. The single closest pair across all label occurrences wins; on
/// equal gaps the earlier pair in word order is kept.
///
/// The label regex is used as given, so callers compile it case-insensitive.
pub fn find_right_of<'a>(
    words: &'a [PositionedWord],
    label: &Regex,
    options: &LocateOptions,
) -> Option<LocatedValue<'a>> {
    let mut best: Option<LocatedValue<'a>> = None;

    for (label_idx, label_word) in words.iter().enumerate() {
        if !label.is_match(&label_word.text) {
            continue;
        }
        let label_center = label_word.center_y();

        for (idx, word) in words.iter().enumerate() {
            if idx == label_idx {
                continue;
            }
            if (word.center_y() - label_center).abs() > options.vertical_tolerance {
                continue;
            }
            if word.x0 <= label_word.x1 {
                continue;
            }
            let gap = word.x0 - label_word.x1;
            if gap >= options.max_horizontal_gap {
                continue;
            }
            if best.as_ref().map_or(true, |b| gap < b.gap) {
                best = Some(LocatedValue {
                    label: label_word,
                    value: word,
                    gap,
                });
            }
        }
    }

    best
}

/// Text of the nearest right-neighbor of `label`, or an empty string.
///
/// An empty result means "not found here, try the next strategy"; it is
/// never an error.
///
/// # Examples
///
/// ```
/// use actas_oxide::layout::PositionedWord;
/// use actas_oxide::search::{locate_right_of, LocateOptions};
/// use regex::RegexBuilder;
///
/// let words = vec![
///     PositionedWord::new("Sección(8)", 100.0, 110.0, 50.0, 100.0),
///     PositionedWord::new("UNICA", 100.0, 110.0, 120.0, 160.0),
/// ];
/// let label = RegexBuilder::new(r"SECCI[ÓO]N").case_insensitive(true).build().unwrap();
/// let value = locate_right_of(&words, &label, &LocateOptions::new(300.0, 2.0));
/// assert_eq!(value, "UNICA");
/// ```
pub fn locate_right_of(words: &[PositionedWord], label: &Regex, options: &LocateOptions) -> String {
    find_right_of(words, label, options)
        .map(|found| {
            log::trace!(
                "'{}' right of '{}' (gap {:.1})",
                found.value.text,
                found.label.text,
                found.gap
            );
            found.value.text.clone()
        })
        .unwrap_or_default()
}
