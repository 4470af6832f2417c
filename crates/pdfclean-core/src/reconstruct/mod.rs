pub mod boilerplate;
pub mod lines;

use std::collections::HashSet;

use crate::extraction::PageWords;
use crate::model::{CleanDocument, CleanPage};
use crate::normalize::normalize_text;
use crate::options::ExtractOptions;
use boilerplate::LineFrequency;
use lines::page_lines;

/// Separator placed between consecutive pages in `full_text`.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Turn per-page word geometry into clean, deduplicated, normalized text.
///
/// Runs in two phases: every page is first broken into lines and the
/// document-wide line frequencies are counted, then each page drops the
/// repeating lines and is normalized. Page order is preserved.
pub fn extract(pages: &[PageWords], options: &ExtractOptions) -> CleanDocument {
    let page_line_lists: Vec<Vec<String>> = pages
        .iter()
        .map(|page| {
            let lines = page_lines(page, options);
            log::debug!("page {}: {} line(s)", page.page_number, lines.len());
            lines
        })
        .collect();

    let frequency = LineFrequency::from_pages(&page_line_lists);
    let repeating = frequency.repeating_lines();
    log::debug!("{} repeating line(s) across the document", repeating.len());

    let clean_pages: Vec<CleanPage> = pages
        .iter()
        .zip(&page_line_lists)
        .map(|(page, lines)| finalize_page(page.page_number, lines, &repeating))
        .collect();

    let full_text = clean_pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);

    CleanDocument {
        full_text,
        pages: clean_pages,
    }
}

/// Drop repeating lines from one page and normalize what is left.
pub fn finalize_page(
    page_number: usize,
    lines: &[String],
    repeating: &HashSet<&str>,
) -> CleanPage {
    let kept: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| !repeating.contains(line))
        .collect();

    CleanPage {
        page: page_number,
        text: normalize_text(&kept.join("\n")),
    }
}
