//! Positioned word tokens.
//!
//! Coordinates are in page space with the origin at the top-left corner and
//! y growing downward, the way the header layout of an acta is read.

use serde::{Deserialize, Serialize};

/// One token on the page with its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedWord {
    /// Token text as extracted (original case)
    pub text: String,
    /// Top edge y-coordinate
    pub top: f32,
    /// Bottom edge y-coordinate
    pub bottom: f32,
    /// Left edge x-coordinate
    pub x0: f32,
    /// Right edge x-coordinate
    pub x1: f32,
}

impl PositionedWord {
    /// Create a new positioned word.
    ///
    /// # Examples
    ///
    /// ```
    /// use actas_oxide::layout::PositionedWord;
    ///
    /// let word = PositionedWord::new("UNICA", 100.0, 110.0, 120.0, 160.0);
    /// assert_eq!(word.center_y(), 105.0);
    /// ```
    pub fn new(text: impl Into<String>, top: f32, bottom: f32, x0: f32, x1: f32) -> Self {
        Self {
            text: text.into(),
            top,
            bottom,
            x0,
            x1,
        }
    }

    /// Vertical center of the bounding box.
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Whether the token carries any visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split a multi-word text run into one [`PositionedWord`] per token.
///
/// Providers often report whole runs ("Grado(5) 3 Sección(8) B") as a single
/// box. Each character gets an equal slice of `x0..x1`; whitespace separates
/// tokens and is dropped.
///
/// # Examples
///
/// ```
/// use actas_oxide::layout::split_run;
///
/// let words = split_run("Grado(5) 3", 0.0, 100.0, 10.0, 20.0);
/// assert_eq!(words.len(), 2);
/// assert_eq!((words[1].x0, words[1].x1), (90.0, 100.0));
/// ```
pub fn split_run(text: &str, x0: f32, x1: f32, top: f32, bottom: f32) -> Vec<PositionedWord> {
    let char_count = text.chars().count();
    if char_count == 0 {
        return Vec::new();
    }
    let char_width = (x1 - x0) / char_count as f32;

    let mut words = Vec::new();
    let mut token = String::new();
    let mut start: Option<usize> = None;
    for (idx, c) in text.chars().chain(std::iter::once(' ')).enumerate() {
        if c.is_whitespace() {
            if let Some(first) = start.take() {
                words.push(PositionedWord::new(
                    std::mem::take(&mut token),
                    top,
                    bottom,
                    x0 + first as f32 * char_width,
                    x0 + idx as f32 * char_width,
                ));
            }
        } else {
            start.get_or_insert(idx);
            token.push(c);
        }
    }
    words
}
