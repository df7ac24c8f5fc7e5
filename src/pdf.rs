//! First-page word extraction backed by `pdf_oxide`.
//!
//! Spans come out in PDF user space (origin bottom-left, y up); they are
//! flipped into top-left page coordinates against the upper edge of the first
//! page's MediaBox.
//!
//! A span is a whole text run and may hold several words ("Grado(5) 3"), so
//! each span goes through [`split_run`] before it reaches the locator.

use crate::error::{Error, Result};
use crate::layout::split_run;
use crate::page::{RawPage, WordSource};
use pdf_oxide::object::Object;
use pdf_oxide::PdfDocument;
use std::io::Write;

/// US Letter height, used when no MediaBox can be read.
const DEFAULT_PAGE_HEIGHT: f32 = 792.0;

/// Page tree nesting followed before giving up.
const MAX_TREE_DEPTH: usize = 32;

/// Vertical extent of a page from its MediaBox.
#[derive(Debug, Clone, Copy, PartialEq)]
struct VerticalBox {
    lower: f32,
    upper: f32,
}

impl VerticalBox {
    fn height(&self) -> f32 {
        self.upper - self.lower
    }

    /// `(top, bottom)` in top-left page space for a box at user-space `y`.
    fn flip(&self, y: f32, height: f32) -> (f32, f32) {
        (self.upper - (y + height), self.upper - y)
    }
}

impl Default for VerticalBox {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: DEFAULT_PAGE_HEIGHT,
        }
    }
}

/// [`WordSource`] that reads PDF bytes with `pdf_oxide`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfOxideSource;

impl PdfOxideSource {
    /// Create a new source.
    pub fn new() -> Self {
        Self
    }
}

fn source_error(e: impl std::fmt::Display) -> Error {
    Error::Source(e.to_string())
}

fn number(obj: &Object) -> Option<f32> {
    obj.as_real()
        .map(|r| r as f32)
        .or_else(|| obj.as_integer().map(|i| i as f32))
}

fn media_box(obj: &Object) -> Option<VerticalBox> {
    let arr = obj.as_dict()?.get("MediaBox")?.as_array()?;
    let y0 = number(arr.get(1)?)?;
    let y1 = number(arr.get(3)?)?;
    Some(VerticalBox {
        lower: y0.min(y1),
        upper: y0.max(y1),
    })
}

fn is_leaf_page(node: &Object) -> bool {
    let dict = match node.as_dict() {
        Some(dict) => dict,
        None => return true,
    };
    dict.get("Type").and_then(|t| t.as_name()) == Some("Page") || !dict.contains_key("Kids")
}

fn first_kid(doc: &mut PdfDocument, node: &Object) -> Option<Object> {
    let kid = node.as_dict()?.get("Kids")?.as_array()?.first()?.clone();
    match kid.as_reference() {
        Some(kid_ref) => doc.load_object(kid_ref).ok(),
        None => Some(kid),
    }
}

/// MediaBox of the first leaf page, walking down the page tree and
/// inheriting the nearest ancestor's box.
fn first_page_box(doc: &mut PdfDocument) -> Option<VerticalBox> {
    let catalog = doc.catalog().ok()?;
    let pages_ref = catalog.as_dict()?.get("Pages")?.as_reference()?;
    let mut node = doc.load_object(pages_ref).ok()?;
    let mut found = media_box(&node);

    for _ in 0..MAX_TREE_DEPTH {
        if is_leaf_page(&node) {
            return found;
        }
        node = first_kid(doc, &node)?;
        found = media_box(&node).or(found);
    }
    log::debug!("page tree deeper than {}, using last MediaBox seen", MAX_TREE_DEPTH);
    found
}

impl WordSource for PdfOxideSource {
    fn first_page(&self, bytes: &[u8]) -> Result<RawPage> {
        // pdf_oxide opens from a path
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;

        let mut doc = PdfDocument::open(file.path()).map_err(source_error)?;
        if doc.page_count().map_err(source_error)? == 0 {
            log::warn!("document has no pages");
            return Ok(RawPage::new(DEFAULT_PAGE_HEIGHT, Vec::new()));
        }

        let page_box = first_page_box(&mut doc).unwrap_or_else(|| {
            log::debug!("no MediaBox found, assuming {} pt page", DEFAULT_PAGE_HEIGHT);
            VerticalBox::default()
        });

        let words = doc
            .extract_spans(0)
            .map_err(source_error)?
            .into_iter()
            .flat_map(|span| {
                let b = span.bbox;
                let (top, bottom) = page_box.flip(b.y, b.height);
                split_run(&span.text, b.x, b.x + b.width, top, bottom)
            })
            .collect::<Vec<_>>();

        log::debug!(
            "read {} words from page 1 (height {:.1})",
            words.len(),
            page_box.height()
        );
        Ok(RawPage::new(page_box.height(), words))
    }
}
