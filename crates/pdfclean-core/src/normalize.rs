use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*\n\s*").expect("valid regex"));
static SENTENCE_END_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])([A-Z0-9])").expect("valid regex"));
static CASE_BOUNDARY_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Repair common PDF layout artifacts in a block of text.
///
/// Steps, in order:
/// 1. Join words hyphenated across a line break (`"rejec-\nting"` -> `"rejecting"`)
/// 2. Add a space after `.`, `!` or `?` glued to an uppercase letter or digit
/// 3. Add a space at a glued lowercase-to-uppercase boundary
/// 4. Collapse every whitespace run, newlines included, to one space
/// 5. Trim
///
/// The result is a fixed point: normalizing it again changes nothing.
pub fn normalize_text(text: &str) -> String {
    let text = LINE_BREAK_HYPHEN.replace_all(text, "");
    let text = SENTENCE_END_GLUED.replace_all(&text, "${1} ${2}");
    let text = CASE_BOUNDARY_GLUED.replace_all(&text, "${1} ${2}");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_line_break_hyphenation() {
        assert_eq!(normalize_text("rejec-\nting"), "rejecting");
        assert_eq!(normalize_text("rejec- \n  ting the offer"), "rejecting the offer");
    }

    #[test]
    fn test_keeps_inline_hyphens() {
        assert_eq!(normalize_text("well-known fact"), "well-known fact");
    }

    #[test]
    fn test_spaces_after_sentence_punctuation() {
        assert_eq!(normalize_text("solve.Let"), "solve. Let");
        assert_eq!(normalize_text("Done!Next?Yes"), "Done! Next? Yes");
        assert_eq!(normalize_text("Section 2.3"), "Section 2. 3");
    }

    #[test]
    fn test_splits_merged_case_words() {
        assert_eq!(normalize_text("usefulRelevant"), "useful Relevant");
        assert_eq!(normalize_text("aBcD"), "a Bc D");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(
            normalize_text("  foo\t\tbar   baz\n\nqux \n"),
            "foo bar baz qux"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_hyphen_join_then_case_split() {
        assert_eq!(normalize_text("data-\nBase"), "data Base");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "rejec-\nting the offer.Then we\tleft",
            "usefulRelevant results!Again?No",
            "A.B.C and x.aB",
            "  plain   text  ",
            "multi\n\nline-\n text",
        ];
        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "input: {input:?}");
        }
    }
}
