//! Section recognition.
//!
//! Sections are a single letter or "única" (encoded `U`). Three tiers are
//! tried in order:
//!
//! 1. [`UniqueSectionLabel`]: the nearest word right of a `SECCIÓN`/`s(8)`
//!    label (gap 300, tolerance 2) reads "ÚNICA" or "U"
//! 2. [`GeometricSection`]: the nearest word right of a `(8)` marker, else of
//!    a plain `SECCIÓN` label (gap 250, tolerance 2), cleaned
//! 3. [`TextualSection`]: the first acceptable token after `SECCIÓN` on a
//!    reconstructed line
//!
//! Tiers 2 and 3 reject values from the [`SECTION_STOPLIST`]: short codes of
//! neighboring header fields (management type, shift, program) that a loose
//! match can pick up instead of the section. Whatever tier wins, the value
//! goes through [`normalize_section`].

use super::defaults::FieldDefault;
use super::strategy::{FieldStrategy, StrategyChain};
use crate::page::PageContent;
use crate::search::{locate_right_of, LocateOptions};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Values that belong to neighboring fields and are never a section.
pub const SECTION_STOPLIST: [&str; 10] = [
    "GESTION", "PUBLICA", "PRIVADA", "P", "S", "M", "T", "EBR", "ESC", "PM",
];

/// Section value for "única".
pub const UNIQUE_SECTION: &str = "U";

/// Section letters accepted as the first character of a longer token.
const SECTION_LETTERS: &str = "ABCDEFGHIJKLMN";

lazy_static! {
    static ref LABEL_SECTION_OR_MARKER: Regex = case_insensitive(r"SECCI[ÓO]N|s\(8\)");
    static ref LABEL_MARKER_8: Regex = case_insensitive(r"\(8\)");
    static ref LABEL_SECTION: Regex = case_insensitive(r"SECCI[ÓO]N");

    /// `SECCIÓN` with its optional `(8)` marker
    static ref RE_SECTION_LINE_LABEL: Regex = Regex::new(r"SECCI[ÓO]N(?:\s*\(8\))?").unwrap();
    static ref RE_SECTION_TOKEN: Regex = Regex::new(r"\b(?:ÚNICA|UNICA|[A-Z0-9]+)\b").unwrap();

    static ref RE_NON_ALNUM: Regex = Regex::new(r"[^A-Z0-9]").unwrap();
}

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// Uppercase and fold `Ú` to `U`.
fn fold(value: &str) -> String {
    value.to_uppercase().replace('Ú', "U")
}

/// Whether a cleaned candidate is a known neighboring-field value.
pub fn is_stopword(candidate: &str) -> bool {
    SECTION_STOPLIST.contains(&candidate)
}

/// Tier 1: explicit "única" right of the section label.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueSectionLabel;

impl FieldStrategy for UniqueSectionLabel {
    fn name(&self) -> &'static str {
        "unique-label"
    }

    fn extract(&self, page: &PageContent) -> Option<String> {
        let found = locate_right_of(
            page.words(),
            &LABEL_SECTION_OR_MARKER,
            &LocateOptions::new(300.0, 2.0),
        );
        let folded = fold(&found);
        (folded.contains("UNICA") || folded == UNIQUE_SECTION).then(|| UNIQUE_SECTION.to_string())
    }
}

/// Tier 2: cleaned value right of the `(8)` marker or the section label.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricSection;

impl FieldStrategy for GeometricSection {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn extract(&self, page: &PageContent) -> Option<String> {
        let options = LocateOptions::new(250.0, 2.0);
        let mut found = locate_right_of(page.words(), &LABEL_MARKER_8, &options);
        if found.is_empty() {
            found = locate_right_of(page.words(), &LABEL_SECTION, &options);
        }
        let clean = RE_NON_ALNUM.replace_all(&fold(&found), "").into_owned();
        if clean.is_empty() {
            return None;
        }
        if is_stopword(&clean) {
            log::debug!("section: rejected neighboring-field value '{}'", clean);
            return None;
        }
        Some(clean)
    }
}

/// Tier 3: first acceptable token after `SECCIÓN` on a reconstructed line.
///
/// Tokens on the stoplist are skipped, so a neighboring-field value printed
/// between the label and the section does not hide it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualSection;

impl FieldStrategy for TextualSection {
    fn name(&self) -> &'static str {
        "line-regex"
    }

    fn extract(&self, page: &PageContent) -> Option<String> {
        page.lines_upper().find_map(|line| {
            let label = RE_SECTION_LINE_LABEL.find(line)?;
            RE_SECTION_TOKEN
                .find_iter(&line[label.end()..])
                .map(|token| fold(token.as_str()))
                .find(|candidate| !is_stopword(candidate))
        })
    }
}

/// The section tiers in priority order.
pub fn section_chain() -> StrategyChain {
    StrategyChain::new("section")
        .then(UniqueSectionLabel)
        .then(GeometricSection)
        .then(TextualSection)
}

/// Reduce a raw section value to `U` or a single character.
///
/// - contains "UNICA" or is "U" → `U`
/// - longer than one character → its first character if it is a letter
///   A–N, otherwise the section default
/// - empty → the section default
///
/// Applying it to its own output returns the same value.
pub fn normalize_section(raw: &str) -> String {
    let value = fold(raw.replace('"', "").trim());

    if value.contains("UNICA") || value == UNIQUE_SECTION {
        return UNIQUE_SECTION.to_string();
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => FieldDefault::Section.value().to_string(),
        (Some(_), None) => value,
        (Some(first), Some(_)) if SECTION_LETTERS.contains(first) => first.to_string(),
        (Some(_), Some(_)) => FieldDefault::Section.value().to_string(),
    }
}

/// Extract and normalize the section of a page.
pub fn extract_section(page: &PageContent) -> String {
    let raw = section_chain().run(page).map(|hit| hit.value);
    normalize_section(&FieldDefault::Section.or_default(raw))
}
