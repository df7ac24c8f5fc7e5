//! Canonical filename and archive placement.
//!
//! Filenames follow `"{year} - {modular code} - {institution} - {grade section}[ REC].pdf"`.
//! Names are capped at 180 characters before the extension so the full path
//! stays under the 260-character Windows limit. Both functions are pure.

use crate::extractors::institution::RE_ILLEGAL_FILENAME;
use crate::model::ActaMetadata;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Maximum filename length before the extension, ellipsis included.
pub const MAX_NAME_LEN: usize = 180;

/// Archive file extension.
pub const EXTENSION: &str = ".pdf";

/// Suffix for recovery actas.
const RECOVERY_SUFFIX: &str = " REC";

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove characters not allowed in Windows filenames.
pub fn strip_illegal(text: &str) -> String {
    RE_ILLEGAL_FILENAME.replace_all(text, "").trim().to_string()
}

/// Derive the canonical filename of a record.
///
/// # Examples
///
/// ```
/// use actas_oxide::model::{ActaMetadata, Level};
/// use actas_oxide::naming::derive_filename;
///
/// let record = ActaMetadata {
///     original_filename: "scan.pdf".into(),
///     year: "2024".into(),
///     modular_code: "1154814".into(),
///     annex: "0".into(),
///     institution_name: "71009".into(),
///     level: Level::Secundaria,
///     grade_section: "5to B".into(),
///     is_recovery: true,
///     new_filename: None,
/// };
/// assert_eq!(derive_filename(&record), "2024 - 1154814 - 71009 - 5to B REC.pdf");
/// ```
pub fn derive_filename(record: &ActaMetadata) -> String {
    let base = format!(
        "{} - {} - {} - {}{}",
        record.year,
        record.modular_code,
        record.institution_name,
        record.grade_section,
        if record.is_recovery { RECOVERY_SUFFIX } else { "" }
    );
    let mut name = RE_WHITESPACE.replace_all(&base, " ").trim().to_string();

    if name.chars().count() > MAX_NAME_LEN {
        name = name.chars().take(MAX_NAME_LEN - 3).collect::<String>() + "...";
    }

    strip_illegal(&format!("{}{}", name, EXTENSION))
}

/// Relative placement of a record inside the archive: `year/level`.
pub fn relative_dir(record: &ActaMetadata) -> PathBuf {
    Path::new(&record.year).join(record.level.as_str())
}

/// Destination of a record: `archive_root/year/level/filename`.
///
/// Directories are not created here.
pub fn derive_path(record: &ActaMetadata, archive_root: &Path) -> PathBuf {
    archive_root.join(relative_dir(record)).join(derive_filename(record))
}
