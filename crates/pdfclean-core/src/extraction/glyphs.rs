/// Strip invisible formatting characters and expand typographic ligatures.
///
/// PDF text layers often carry soft hyphens and zero-width joiners that are
/// invisible on the page, and presentation-form ligatures that break search.
///
/// A soft hyphen that ends the word marks a line-break split, so it becomes a
/// real `-` and the split is joined later like any other hyphenated break.
pub fn clean_glyphs(raw: &str) -> String {
    let visible = raw.trim_end_matches(is_invisible);
    let (body, line_break_hyphen) = match visible.strip_suffix('\u{00AD}') {
        Some(body) => (body, true),
        None => (raw, false),
    };

    let mut out = String::with_capacity(raw.len());
    for c in body.chars() {
        match c {
            '\u{00AD}' => {}
            c if is_invisible(c) => {}
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            '\u{FB05}' | '\u{FB06}' => out.push_str("st"),
            _ => out.push(c),
        }
    }
    if line_break_hyphen {
        out.push('-');
    }
    out
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}
