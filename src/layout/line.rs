//! Line reconstruction from positioned words.
//!
//! Words are sorted top-to-bottom, then grouped while their top edge stays
//! within `tolerance` of the first word of the current line. Each line is
//! ordered left-to-right and joined with single spaces. Lines are only a
//! fallback text surface; geometric lookups never read them.

use super::word::PositionedWord;

/// Default vertical tolerance for grouping words into one line.
pub const DEFAULT_LINE_TOLERANCE: f32 = 5.0;

/// A reconstructed line of words sharing an approximate vertical position.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Words in left-to-right order
    pub words: Vec<&'a PositionedWord>,
}

impl Line<'_> {
    /// Text of the line, words joined by a single space.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Top edge of the line (top of its first-placed word).
    pub fn top(&self) -> f32 {
        self.words
            .iter()
            .map(|w| w.top)
            .fold(f32::INFINITY, f32::min)
    }
}

/// Group words into lines.
///
/// # Examples
///
/// ```
/// use actas_oxide::layout::{group_lines, PositionedWord};
///
/// let words = vec![
///     PositionedWord::new("UNICA", 101.0, 111.0, 120.0, 160.0),
///     PositionedWord::new("Sección(8)", 100.0, 110.0, 50.0, 100.0),
///     PositionedWord::new("PRIMARIA", 130.0, 140.0, 50.0, 90.0),
/// ];
/// let lines = group_lines(&words, 5.0);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text(), "Sección(8) UNICA");
/// ```
pub fn group_lines(words: &[PositionedWord], tolerance: f32) -> Vec<Line<'_>> {
    let mut sorted: Vec<&PositionedWord> = words.iter().collect();
    sorted.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

    let mut lines = Vec::new();
    let mut current: Vec<&PositionedWord> = Vec::new();
    let mut current_y = match sorted.first() {
        Some(first) => first.top,
        None => return lines,
    };

    for word in sorted {
        if (word.top - current_y).abs() > tolerance {
            lines.push(finish_line(std::mem::take(&mut current)));
            current_y = word.top;
        }
        current.push(word);
    }
    if !current.is_empty() {
        lines.push(finish_line(current));
    }

    lines
}

fn finish_line(mut words: Vec<&PositionedWord>) -> Line<'_> {
    words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    Line { words }
}

/// Reconstruct the page text: one line of text per reconstructed line.
pub fn reconstruct_text(words: &[PositionedWord], tolerance: f32) -> String {
    group_lines(words, tolerance)
        .iter()
        .map(Line::text)
        .collect::<Vec<_>>()
        .join("\n")
}
