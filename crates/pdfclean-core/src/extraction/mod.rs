pub mod glyphs;
pub mod pdftotext;

use crate::error::PdfCleanError;

/// A positioned token on a page.
///
/// `top` is measured from the top edge of the page downwards, in PDF points.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub x0: f64,
    pub top: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, x0: f64, top: f64) -> Self {
        Word {
            text: text.into(),
            x0,
            top,
        }
    }
}

/// Words extracted from a single page of a PDF, in backend stream order.
#[derive(Debug, Clone)]
pub struct PageWords {
    pub page_number: usize,
    pub height: f64,
    pub words: Vec<Word>,
}

/// How aggressively a backend joins neighbouring glyph runs into one word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordTolerance {
    pub x: f64,
    pub y: f64,
}

impl Default for WordTolerance {
    fn default() -> Self {
        WordTolerance { x: 1.0, y: 1.0 }
    }
}

/// Trait for PDF word-geometry backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract positioned words from PDF bytes, returning one PageWords per page.
    fn extract_words(
        &self,
        pdf_bytes: &[u8],
        tolerance: WordTolerance,
    ) -> Result<Vec<PageWords>, PdfCleanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
