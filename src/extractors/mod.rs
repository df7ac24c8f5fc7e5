//! Per-field extractors for the acta header.
//!
//! Each field layers a geometric lookup, a line-scoped regex fallback and a
//! default value. Only the level extractor can fail.

pub mod basic;
pub mod defaults;
pub mod grade;
pub mod institution;
pub mod section;
pub mod strategy;

pub use basic::{extract_level, extract_modular_code, extract_recovery, extract_year};
pub use defaults::FieldDefault;
pub use grade::{extract_grade, format_grade_section, grade_chain, normalize_grade, ordinal_grade};
pub use institution::{extract_institution, sanitize_institution, MAX_INSTITUTION_LEN};
pub use section::{
    extract_section, is_stopword, normalize_section, section_chain, SECTION_STOPLIST,
    UNIQUE_SECTION,
};
pub use strategy::{ChainHit, FieldStrategy, StrategyChain};
