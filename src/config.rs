//! Configuration for acta extraction.

use crate::directory::InstitutionDirectory;
use crate::layout::DEFAULT_LINE_TOLERANCE;

/// Fraction of the page height, from the top, that holds the acta header.
pub const DEFAULT_HEADER_FRACTION: f32 = 0.5;

/// Extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Words whose top edge lies below `height * header_fraction` are ignored.
    pub header_fraction: f32,

    /// Vertical tolerance used when reconstructing lines.
    pub line_tolerance: f32,

    /// Known institutions recognized by modular code or text markers.
    pub institutions: InstitutionDirectory,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults and an empty directory.
    pub fn new() -> Self {
        Self {
            header_fraction: DEFAULT_HEADER_FRACTION,
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            institutions: InstitutionDirectory::default(),
        }
    }

    /// Set the header fraction (clamped to `0.0..=1.0`).
    pub fn with_header_fraction(mut self, fraction: f32) -> Self {
        self.header_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Set the line grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance.max(0.0);
        self
    }

    /// Use a known-institution directory.
    pub fn with_institutions(mut self, institutions: InstitutionDirectory) -> Self {
        self.institutions = institutions;
        self
    }
}
