//! Acta metadata assembly.
//!
//! [`ActaParser`] is the single entry point of the extraction core. It runs
//! the field extractors in a fixed order and either returns a complete
//! [`ActaMetadata`] or a parsing error; there is no partially filled record.

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::extractors::{
    extract_grade, extract_institution, extract_level, extract_modular_code, extract_recovery,
    extract_section, extract_year, format_grade_section, FieldDefault,
};
use crate::model::ActaMetadata;
use crate::page::{PageContent, WordSource};

/// Builds [`ActaMetadata`] from page content.
#[derive(Debug, Clone, Default)]
pub struct ActaParser {
    config: ExtractionConfig,
}

impl ActaParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// The parser configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Read the first page of `bytes` through `source` and parse it.
    ///
    /// Any provider failure becomes `could not read PDF: <detail>`.
    pub fn parse_bytes(
        &self,
        source: &dyn WordSource,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<ActaMetadata> {
        let raw = source.first_page(bytes).map_err(|e| match e {
            Error::Parsing(message) => Error::Parsing(message),
            Error::Source(detail) => Error::unreadable(detail),
            other => Error::unreadable(other),
        })?;
        let page = PageContent::from_raw(raw, &self.config);
        self.parse_page(&page, original_filename)
    }

    /// Parse already extracted page content.
    ///
    /// Fails only when no educational level is present.
    pub fn parse_page(&self, page: &PageContent, original_filename: &str) -> Result<ActaMetadata> {
        let text = page.text_upper();

        let year = extract_year(text);
        let modular_code = extract_modular_code(text);

        let level = extract_level(text).map_err(|e| {
            log::warn!("{}: {}", original_filename, e);
            e
        })?;

        let grade = extract_grade(page);
        let section = extract_section(page);
        let grade_section = format_grade_section(level, &grade, &section);

        let institution_name = extract_institution(page, &modular_code, &self.config.institutions);
        let is_recovery = extract_recovery(text, original_filename);

        log::info!(
            "{}: {} {} {} '{}' {}{}",
            original_filename,
            year,
            modular_code,
            level,
            institution_name,
            grade_section,
            if is_recovery { " REC" } else { "" }
        );

        Ok(ActaMetadata {
            original_filename: original_filename.to_string(),
            year,
            modular_code,
            annex: FieldDefault::Annex.value().to_string(),
            institution_name,
            level,
            grade_section,
            is_recovery,
            new_filename: None,
        })
    }
}
