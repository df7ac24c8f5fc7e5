//! Page input for the extraction core.
//!
//! A [`WordSource`] turns raw document bytes into a [`RawPage`] (page height
//! plus every positioned word on the first page). [`PageContent`] narrows that
//! to the header region and prepares the two surfaces the extractors read:
//! the positioned words for geometric lookups and the reconstructed,
//! uppercased text for regex fallbacks.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::layout::{reconstruct_text, PositionedWord};

/// First page of a document as delivered by a text/coordinate provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPage {
    /// Page height in page units
    pub height: f32,
    /// All words on the page, top-left origin
    pub words: Vec<PositionedWord>,
}

impl RawPage {
    /// Create a raw page.
    pub fn new(height: f32, words: Vec<PositionedWord>) -> Self {
        Self { height, words }
    }
}

/// External PDF-to-words provider.
///
/// Implementations read only the first page. Any failure to open or read the
/// bytes is reported as an error; the parser wraps it uniformly as a parsing
/// error.
pub trait WordSource {
    /// Read the first page of `bytes`.
    fn first_page(&self, bytes: &[u8]) -> Result<RawPage>;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn first_page(&self, bytes: &[u8]) -> Result<RawPage> {
        (**self).first_page(bytes)
    }
}

/// Header-region content of one page, ready for field extraction.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    words: Vec<PositionedWord>,
    text_upper: String,
}

impl PageContent {
    /// Build page content from already reconstructed text and a word set.
    ///
    /// The text is uppercased for matching; words are kept as given.
    pub fn new(text: &str, words: Vec<PositionedWord>) -> Self {
        Self {
            words,
            text_upper: text.to_uppercase(),
        }
    }

    /// Build page content from a raw page: keep words in the header region
    /// (`top < height * header_fraction`) and reconstruct lines from them.
    pub fn from_raw(raw: RawPage, config: &ExtractionConfig) -> Self {
        let limit = raw.height * config.header_fraction;
        let words: Vec<PositionedWord> = raw
            .words
            .into_iter()
            .filter(|w| w.top < limit && !w.is_blank())
            .collect();
        let text = reconstruct_text(&words, config.line_tolerance);
        log::debug!(
            "header region: {} words, {} lines (limit y < {:.1})",
            words.len(),
            text.lines().count(),
            limit
        );
        Self::new(&text, words)
    }

    /// Header words with coordinates.
    pub fn words(&self) -> &[PositionedWord] {
        &self.words
    }

    /// Full uppercased text.
    pub fn text_upper(&self) -> &str {
        &self.text_upper
    }

    /// Uppercased text, one reconstructed line at a time.
    pub fn lines_upper(&self) -> impl Iterator<Item = &str> {
        self.text_upper.split('\n')
    }
}
