pub mod error;
pub mod extraction;
pub mod model;
pub mod normalize;
pub mod options;
pub mod reconstruct;

use error::PdfCleanError;
use extraction::PdfExtractor;
use model::CleanDocument;

pub use options::ExtractOptions;
pub use reconstruct::extract;

/// Main API entry point: extract cleaned, paginated text from a PDF.
///
/// Asks the backend for positioned words, then rebuilds lines, strips
/// running headers/footers and normalizes each page. Backend failures are
/// returned as-is; there is no partial output.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<CleanDocument, PdfCleanError> {
    let pages = extractor.extract_words(pdf_bytes, options.word_tolerance())?;
    log::debug!(
        "{} extracted {} page(s)",
        extractor.backend_name(),
        pages.len()
    );
    Ok(reconstruct::extract(&pages, options))
}
