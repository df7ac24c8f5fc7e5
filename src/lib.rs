//! # Actas Oxide
//!
//! Metadata extraction and archival renaming for SIAGIE academic-record PDFs
//! ("actas").
//!
//! ## Core Features
//!
//! - **Geometric-first extraction**: header fields are read from the word
//!   printed right of their label, using coordinates only
//! - **Text fallback**: line-scoped regular expressions when geometry fails
//! - **Best-effort defaults**: every field degrades to a documented sentinel,
//!   except the educational level, which is required
//! - **Canonical naming**: `"{year} - {modular code} - {institution} - {grade section}.pdf"`
//!   placed under `<root>/<year>/<level>/`
//! - **Batch archive**: sequential processing, per-document error reporting,
//!   ZIP packaging
//!
//! ## Architecture
//!
//! - [`page::WordSource`]: external PDF-to-words provider (enable the `pdf`
//!   feature for the `pdf_oxide`-backed implementation)
//! - [`parser::ActaParser`]: assembles [`model::ActaMetadata`] from a page
//! - [`naming`]: pure filename and path derivation
//! - [`archive::ActaArchive`]: writes the archive under an explicit root
//!
//! ## Quick Start
//!
//! ```
//! use actas_oxide::layout::PositionedWord;
//! use actas_oxide::naming::derive_filename;
//! use actas_oxide::page::PageContent;
//! use actas_oxide::parser::ActaParser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "Año 2024\nNúmero y/o Nombre 71009\nNivel SECUNDARIA\nGrado(5) 5 Sección(8) B";
//! let words = vec![
//!     PositionedWord::new("Sección(8)", 100.0, 110.0, 50.0, 100.0),
//!     PositionedWord::new("B", 100.0, 110.0, 120.0, 130.0),
//! ];
//! let page = PageContent::new(text, words);
//!
//! let record = ActaParser::default().parse_page(&page, "scan.pdf")?;
//! assert_eq!(record.grade_section, "5to B");
//! assert_eq!(derive_filename(&record), "2024 - 0000000 - 71009 - 5to B.pdf");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Word and line model
pub mod layout;
pub mod page;

// Geometric search
pub mod search;

// Field extraction
pub mod extractors;

// Metadata assembly
pub mod parser;

// Records
pub mod model;

// Naming and archive placement
pub mod archive;
pub mod naming;

// Configuration
pub mod config;
pub mod directory;

// PDF provider (optional)
#[cfg(feature = "pdf")]
pub mod pdf;

pub use archive::{load_inputs, ActaArchive, InputDocument, LoadedInput};
pub use config::ExtractionConfig;
pub use directory::{InstitutionDirectory, KnownInstitution};
pub use error::{Error, Result};
pub use model::{ActaMetadata, BatchResult, Level, ProcessResult};
pub use page::{PageContent, RawPage, WordSource};
pub use parser::ActaParser;

#[cfg(feature = "pdf")]
pub use pdf::PdfOxideSource;
