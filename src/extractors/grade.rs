//! Grade recognition and grade-section labels.
//!
//! The grade value often sits slightly off its label's baseline, so the
//! geometric lookups use a looser vertical tolerance (8) than the section
//! ones.

use super::defaults::FieldDefault;
use super::strategy::{FieldStrategy, StrategyChain};
use crate::model::Level;
use crate::page::PageContent;
use crate::search::{locate_right_of, LocateOptions};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    static ref LABEL_MARKER_5: Regex = RegexBuilder::new(r"\(5\)")
        .case_insensitive(true)
        .build()
        .unwrap();
    static ref LABEL_GRADE: Regex = RegexBuilder::new(r"GRADO")
        .case_insensitive(true)
        .build()
        .unwrap();

    /// `GRADO`, optional `(5)` marker, separators, then the value token
    static ref RE_GRADE_LINE: Regex = Regex::new(r"GRADO(?:\s*\(5\))?[:\s]*(\w+)").unwrap();
    static ref RE_NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
}

fn grade_options() -> LocateOptions {
    LocateOptions::default().with_vertical_tolerance(8.0)
}

/// Grade value right of the `(5)` marker, else right of a `GRADO` label.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricGrade;

impl FieldStrategy for GeometricGrade {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn extract(&self, page: &PageContent) -> Option<String> {
        let mut found = locate_right_of(page.words(), &LABEL_MARKER_5, &grade_options());
        if found.is_empty() {
            found = locate_right_of(page.words(), &LABEL_GRADE, &grade_options());
        }
        (!found.is_empty()).then_some(found)
    }
}

/// First `GRADO <value>` on a reconstructed line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualGrade;

impl FieldStrategy for TextualGrade {
    fn name(&self) -> &'static str {
        "line-regex"
    }

    fn extract(&self, page: &PageContent) -> Option<String> {
        page.lines_upper()
            .find_map(|line| RE_GRADE_LINE.captures(line))
            .map(|caps| caps[1].trim().to_string())
    }
}

/// The grade tiers in priority order.
pub fn grade_chain() -> StrategyChain {
    StrategyChain::new("grade")
        .then(GeometricGrade)
        .then(TextualGrade)
}

/// Digits of a raw grade value, or the grade default when there are none.
pub fn normalize_grade(raw: &str) -> String {
    let digits = RE_NON_DIGIT.replace_all(raw, "").into_owned();
    FieldDefault::Grade.or_default((!digits.is_empty()).then_some(digits))
}

/// Extract the numeric grade of a page.
pub fn extract_grade(page: &PageContent) -> String {
    let raw = grade_chain().run(page).map(|hit| hit.value).unwrap_or_default();
    normalize_grade(&raw)
}

/// Ordinal prefix for non-initial levels: 1ro, 2do, 3ro, 4to, 5to, 6to, else `{n}mo`.
pub fn ordinal_grade(grade: &str) -> String {
    match grade {
        "1" => "1ro".to_string(),
        "2" => "2do".to_string(),
        "3" => "3ro".to_string(),
        "4" => "4to".to_string(),
        "5" => "5to".to_string(),
        "6" => "6to".to_string(),
        other => format!("{}mo", other),
    }
}

/// Compose the grade-section label.
///
/// # Examples
///
/// ```
/// use actas_oxide::extractors::format_grade_section;
/// use actas_oxide::model::Level;
///
/// assert_eq!(format_grade_section(Level::Secundaria, "5", "B"), "5to B");
/// assert_eq!(format_grade_section(Level::Inicial, "3", "U"), "3a U");
/// ```
pub fn format_grade_section(level: Level, grade: &str, section: &str) -> String {
    match level {
        Level::Inicial => format!("{}a {}", grade, section),
        Level::Primaria | Level::Secundaria => format!("{} {}", ordinal_grade(grade), section),
    }
}
