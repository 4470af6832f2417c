use pdfclean_core::error::PdfCleanError;
use pdfclean_core::model::CleanDocument;

/// Serialize the document as one JSON object. Non-ASCII text is written as-is.
pub fn render(document: &CleanDocument, pretty: bool) -> Result<String, PdfCleanError> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfclean_core::model::CleanPage;

    fn document() -> CleanDocument {
        CleanDocument {
            full_text: "Résumé\n\nnäste".into(),
            pages: vec![
                CleanPage {
                    page: 1,
                    text: "Résumé".into(),
                },
                CleanPage {
                    page: 2,
                    text: "näste".into(),
                },
            ],
        }
    }

    #[test]
    fn test_compact_output_keeps_non_ascii() {
        let json = render(&document(), false).unwrap();
        assert_eq!(
            json,
            r#"{"full_text":"Résumé\n\nnäste","pages":[{"page":1,"text":"Résumé"},{"page":2,"text":"näste"}]}"#
        );
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let json = render(&document(), true).unwrap();
        let parsed: CleanDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document());
    }

    #[test]
    fn test_empty_document() {
        let json = render(&CleanDocument::default(), false).unwrap();
        assert_eq!(json, r#"{"full_text":"","pages":[]}"#);
    }
}
