//! Text-only field extractors: year, modular code, level and recovery flag.
//!
//! All of these read the uppercased page text. Only [`extract_level`] can
//! fail.

use super::defaults::FieldDefault;
use crate::error::{Error, Result};
use crate::model::Level;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Academic years the archive accepts
    static ref RE_YEAR: Regex = Regex::new(r"20(23|24|25)").unwrap();

    /// Modular code introduced by its label on the same line
    static ref RE_LABELED_CODE: Regex =
        Regex::new(r"(?:C[ÓO]DIGO\s+MODULAR|MODULAR).*?(\d{7})").unwrap();

    /// Any seven-digit run
    static ref RE_BARE_CODE: Regex = Regex::new(r"(\d{7})").unwrap();
}

/// Filename tag that marks a recovery acta.
pub const RECOVERY_FILENAME_TAG: &str = "[REC]";

/// First accepted year in the text, or the year default.
pub fn extract_year(text_upper: &str) -> String {
    FieldDefault::Year.or_default(RE_YEAR.find(text_upper).map(|m| m.as_str().to_string()))
}

/// Seven-digit modular code: labeled first, then any seven-digit run.
pub fn extract_modular_code(text_upper: &str) -> String {
    let found = RE_LABELED_CODE
        .captures(text_upper)
        .or_else(|| RE_BARE_CODE.captures(text_upper))
        .map(|caps| caps[1].to_string());
    FieldDefault::ModularCode.or_default(found)
}

/// Educational level by substring, in priority order.
///
/// This is the only fatal field: a page without any level keyword cannot be
/// archived.
pub fn extract_level(text_upper: &str) -> Result<Level> {
    Level::PRIORITY
        .into_iter()
        .find(|level| text_upper.contains(level.as_str()))
        .ok_or_else(Error::level_not_detected)
}

/// Recovery flag from the page text or the original filename.
pub fn extract_recovery(text_upper: &str, original_filename: &str) -> bool {
    text_upper.contains("RECUPERACIÓN")
        || text_upper.contains("RECUPERACION")
        || original_filename
            .to_uppercase()
            .contains(RECOVERY_FILENAME_TAG)
}
