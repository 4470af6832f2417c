use pdfclean_core::error::PdfCleanError;
use pdfclean_core::extraction::pdftotext::PdftotextExtractor;
use pdfclean_core::ExtractOptions;
use std::path::Path;

use crate::output;

pub fn run(pdf_file: &Path, options: &ExtractOptions, pretty: bool) -> Result<(), PdfCleanError> {
    let pdf_bytes = std::fs::read(pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let document = pdfclean_core::extract_pdf(&pdf_bytes, &extractor, options)?;

    // Render fully before writing so a failure leaves stdout empty.
    let json = output::json::render(&document, pretty)?;
    println!("{json}");

    log::debug!(
        "wrote {} page(s) from {}",
        document.pages.len(),
        pdf_file.display()
    );
    Ok(())
}
