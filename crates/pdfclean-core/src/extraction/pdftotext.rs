use crate::error::PdfCleanError;
use crate::extraction::glyphs::clean_glyphs;
use crate::extraction::{PageWords, PdfExtractor, Word, WordTolerance};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox` to get one bounding box per word, with coordinates
/// measured from the top-left corner of each page.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_words(
        &self,
        pdf_bytes: &[u8],
        tolerance: WordTolerance,
    ) -> Result<Vec<PageWords>, PdfCleanError> {
        // The temp file lives until the end of this call, whatever the outcome.
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| PdfCleanError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PdfCleanError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdfCleanError::PdftotextNotFound
                } else {
                    PdfCleanError::Extraction(format!("pdftotext -bbox failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(PdfCleanError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml)?;
        log::debug!("pdftotext produced {} page(s)", pages.len());

        Ok(pages
            .into_iter()
            .map(|page| page.into_page_words(tolerance))
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

#[derive(Debug, Clone)]
struct BBoxWord {
    text: String,
    x_min: f64,
    y_min: f64,
    x_max: f64,
}

#[derive(Debug, Clone)]
struct BBoxPage {
    page_number: usize,
    height: f64,
    words: Vec<BBoxWord>,
}

impl BBoxPage {
    fn into_page_words(self, tolerance: WordTolerance) -> PageWords {
        let words = merge_fragments(self.words, tolerance)
            .into_iter()
            .map(|w| Word::new(w.text, w.x_min, w.y_min))
            .collect();
        PageWords {
            page_number: self.page_number,
            height: self.height,
            words,
        }
    }
}

fn parse_bbox_xml(xml: &str) -> Result<Vec<BBoxPage>, PdfCleanError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<BBoxPage> = Vec::new();
    let mut open_word: Option<BBoxWord> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(reader.buffer_position(), e))?;

        match event {
            Event::Start(tag) => match tag.name().as_ref() {
                b"page" => {
                    pages.push(BBoxPage {
                        page_number: pages.len() + 1,
                        height: attr_f64(&tag, "height")?,
                        words: Vec::new(),
                    });
                }
                b"word" => {
                    open_word = Some(BBoxWord {
                        text: String::new(),
                        x_min: attr_f64(&tag, "xMin")?,
                        y_min: attr_f64(&tag, "yMin")?,
                        x_max: attr_f64(&tag, "xMax")?,
                    });
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some(word) = open_word.as_mut() {
                    let decoded = text
                        .unescape()
                        .map_err(|e| xml_error(reader.buffer_position(), e))?;
                    word.text.push_str(&decoded);
                }
            }
            Event::End(tag) if tag.name().as_ref() == b"word" => {
                let Some(mut word) = open_word.take() else {
                    continue;
                };
                word.text = clean_glyphs(word.text.trim());
                if word.text.is_empty() {
                    continue;
                }
                match pages.last_mut() {
                    Some(page) => page.words.push(word),
                    None => {
                        return Err(PdfCleanError::Extraction(
                            "word found outside of a <page> element".into(),
                        ))
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pages)
}

/// Join word fragments that pdftotext split although they touch.
///
/// Two consecutive words merge when their top edges are within `tolerance.y`
/// and the gap between them is at most `tolerance.x`.
fn merge_fragments(words: Vec<BBoxWord>, tolerance: WordTolerance) -> Vec<BBoxWord> {
    let mut merged: Vec<BBoxWord> = Vec::with_capacity(words.len());

    for word in words {
        if let Some(prev) = merged.last_mut() {
            let gap = word.x_min - prev.x_max;
            let same_row = (word.y_min - prev.y_min).abs() <= tolerance.y;
            if same_row && (0.0..=tolerance.x).contains(&gap) {
                prev.text.push_str(&word.text);
                prev.x_max = word.x_max;
                continue;
            }
        }
        merged.push(word);
    }

    merged
}

fn attr_f64(tag: &BytesStart<'_>, name: &str) -> Result<f64, PdfCleanError> {
    let tag_name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let attr = tag
        .try_get_attribute(name)
        .map_err(|e| PdfCleanError::Extraction(format!("bad attribute on <{tag_name}>: {e}")))?
        .ok_or_else(|| {
            PdfCleanError::Extraction(format!("<{tag_name}> is missing attribute '{name}'"))
        })?;
    let value = attr
        .unescape_value()
        .map_err(|e| PdfCleanError::Extraction(format!("bad attribute on <{tag_name}>: {e}")))?;
    value.trim().parse().map_err(|_| {
        PdfCleanError::Extraction(format!(
            "<{tag_name}> attribute '{name}' is not a number: {value}"
        ))
    })
}

fn xml_error(position: impl std::fmt::Display, e: impl std::fmt::Display) -> PdfCleanError {
    PdfCleanError::Extraction(format!("malformed pdftotext output at byte {position}: {e}"))
}
