//! Institution name recognition.
//!
//! Order of attempts:
//! 1. the known-institution directory (modular code or text markers)
//! 2. a bare number right after "NÚMERO Y/O NOMBRE" (schools are often
//!    identified by number only)
//! 3. the text after "NOMBRE" on that line, cut at the first neighboring
//!    field keyword
//!
//! The result is sanitized and capped at 50 characters. When nothing usable
//! is found the name is the institution default, "IE DESCONOCIDA".

use super::defaults::FieldDefault;
use crate::directory::InstitutionDirectory;
use crate::page::PageContent;
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum institution name length, in characters.
pub const MAX_INSTITUTION_LEN: usize = 50;

/// Minimum length for a name read from the page.
const MIN_NAME_LEN: usize = 3;

/// Placeholder while no name has been found.
const NO_NAME: &str = "IE SIN NOMBRE";

/// Keywords of neighboring header fields that end the name.
pub const NAME_STOPWORDS: [&str; 12] = [
    "CODIGO",
    "CÓDIGO",
    "MODULAR",
    "UGEL",
    "DRE",
    "PERIODO",
    "PERÍODO",
    "ANEXO",
    "FORMA",
    "ESC",
    "CARACTERISTICA",
    "TURNO",
];

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref RE_NUMERIC_NAME: Regex =
        Regex::new(r"(?:NUMERO|NÚMERO)\s+Y/O\s+NOMBRE\s+[:\.]?\s*(\d+)").unwrap();
    static ref RE_NAME_LABEL: Regex = Regex::new(r"NOMBRE").unwrap();
    static ref RE_LEADING_PUNCT: Regex = Regex::new(r"^[:\-\.\s]+").unwrap();

    /// Characters not allowed in Windows file names
    pub(crate) static ref RE_ILLEGAL_FILENAME: Regex = Regex::new(r#"[\\/*?:"<>|]"#).unwrap();
}

/// Name read from a "NÚMERO Y/O NOMBRE" line, if any.
fn name_from_lines(page: &PageContent) -> Option<String> {
    for line in page.lines_upper() {
        let line = RE_WHITESPACE.replace_all(line, " ");
        if !line.contains("NUMERO Y/O NOMBRE") && !line.contains("NÚMERO Y/O NOMBRE") {
            continue;
        }

        if let Some(caps) = RE_NUMERIC_NAME.captures(&line) {
            return Some(caps[1].to_string());
        }

        if let Some(after) = RE_NAME_LABEL.split(&line).last() {
            let mut candidate = after.trim().to_string();
            for stop in NAME_STOPWORDS {
                if let Some(idx) = candidate.find(stop) {
                    candidate = candidate[..idx].trim().to_string();
                }
            }
            let candidate = RE_LEADING_PUNCT.replace(&candidate, "").into_owned();
            if candidate.chars().count() >= MIN_NAME_LEN {
                return Some(candidate);
            }
        }
    }
    None
}

/// Strip illegal filename characters and cap the length with an ellipsis.
pub fn sanitize_institution(name: &str) -> String {
    let clean = RE_ILLEGAL_FILENAME.replace_all(name, "").trim().to_string();
    if clean.chars().count() > MAX_INSTITUTION_LEN {
        let head: String = clean.chars().take(MAX_INSTITUTION_LEN - 3).collect();
        format!("{}...", head.trim())
    } else {
        clean
    }
}

/// Extract the institution name. Never fails.
pub fn extract_institution(
    page: &PageContent,
    modular_code: &str,
    directory: &InstitutionDirectory,
) -> String {
    let name = directory
        .lookup(modular_code, page.text_upper())
        .map(str::to_string)
        .or_else(|| name_from_lines(page))
        .unwrap_or_else(|| NO_NAME.to_string());

    let name = sanitize_institution(&name);
    if name.chars().count() < MIN_NAME_LEN || name == NO_NAME {
        return FieldDefault::Institution.or_default(None);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::KnownInstitution;

    fn directory() -> InstitutionDirectory {
        InstitutionDirectory::new(vec![KnownInstitution {
            name: "27 SANTA LUCIA FE Y ALEGRIA".to_string(),
            modular_codes: vec!["0227900".to_string()],
            text_markers: vec![vec!["SANTA LUCIA".to_string(), "ALEGRIA".to_string()]],
        }])
    }

    fn extract(text: &str) -> String {
        extract_institution(
            &PageContent::new(text, Vec::new()),
            "0000000",
            &InstitutionDirectory::default(),
        )
    }

    #[test]
    fn test_numeric_name() {
        assert_eq!(extract("Número y/o Nombre 71009\nNivel PRIMARIA"), "71009");
        assert_eq!(extract("NUMERO  Y/O   NOMBRE : 71009"), "71009");
    }

    #[test]
    fn test_text_name_cut_at_stopword() {
        let text = "Número y/o Nombre: Jose Carlos Mariategui Código Modular 1154814";
        assert_eq!(extract(text), "JOSE CARLOS MARIATEGUI");
    }

    #[test]
    fn test_multiple_stopwords_cut_at_each() {
        let text = "NUMERO Y/O NOMBRE SAN JUAN UGEL 03 TURNO M";
        assert_eq!(extract(text), "SAN JUAN");
    }

    #[test]
    fn test_short_name_keeps_scanning() {
        let text = "NUMERO Y/O NOMBRE AB\nNUMERO Y/O NOMBRE - LOS PINOS";
        assert_eq!(extract(text), "LOS PINOS");
    }

    #[test]
    fn test_unknown_when_nothing_found() {
        assert_eq!(extract("NIVEL PRIMARIA"), "IE DESCONOCIDA");
        assert_eq!(extract("NUMERO Y/O NOMBRE ESC"), "IE DESCONOCIDA");
    }

    #[test]
    fn test_directory_overrides_page_text() {
        let page = PageContent::new("Número y/o Nombre FE Y ALEGRIA 27 SANTA LUCIA", Vec::new());
        assert_eq!(
            extract_institution(&page, "0000000", &directory()),
            "27 SANTA LUCIA FE Y ALEGRIA"
        );
        let page = PageContent::new("Número y/o Nombre 71009", Vec::new());
        assert_eq!(
            extract_institution(&page, "0227900", &directory()),
            "27 SANTA LUCIA FE Y ALEGRIA"
        );
    }

    #[test]
    fn test_sanitize_strips_and_caps() {
        assert_eq!(sanitize_institution(" A/B:C* "), "ABC");
        let long = "N".repeat(60);
        let capped = sanitize_institution(&long);
        assert_eq!(capped.chars().count(), 50);
        assert!(capped.ends_with("..."));
    }

    #[test]
    fn test_sanitize_counts_characters_not_bytes() {
        let name = "Ñ".repeat(50);
        assert_eq!(sanitize_institution(&name), name);
    }
}
