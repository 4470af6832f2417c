use std::collections::HashMap;

use crate::extraction::{PageWords, Word};
use crate::options::ExtractOptions;

/// Words sharing one rounded vertical position.
struct LineCluster<'a> {
    min_top: f64,
    words: Vec<&'a Word>,
}

/// Rebuild the text lines of one page from its positioned words.
///
/// Words outside the `[header_margin, height - footer_margin]` band are
/// dropped. The rest are grouped by their top edge rounded to one decimal
/// place, lines are ordered top-to-bottom and words left-to-right.
pub fn page_lines(page: &PageWords, options: &ExtractOptions) -> Vec<String> {
    let floor = options.header_margin;
    let ceiling = page.height - options.footer_margin;

    if ceiling < floor {
        log::warn!(
            "page {}: margins leave no text band (height {}, header {}, footer {})",
            page.page_number,
            page.height,
            options.header_margin,
            options.footer_margin
        );
        return Vec::new();
    }

    let mut clusters: HashMap<i64, LineCluster<'_>> = HashMap::new();
    for word in page
        .words
        .iter()
        .filter(|w| floor <= w.top && w.top <= ceiling)
    {
        let cluster = clusters.entry(line_key(word.top)).or_insert(LineCluster {
            min_top: word.top,
            words: Vec::new(),
        });
        cluster.min_top = cluster.min_top.min(word.top);
        cluster.words.push(word);
    }

    let mut clusters: Vec<LineCluster<'_>> = clusters.into_values().collect();
    clusters.sort_by(|a, b| a.min_top.total_cmp(&b.min_top));

    clusters
        .into_iter()
        .map(|mut cluster| {
            // Stable sort: words at the same x keep stream order.
            cluster.words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
            cluster
                .words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Top edge rounded to one decimal place, as an exact integer key.
///
/// Rounds the exact binary value half-to-even through the formatter, so
/// `100.25` lands on `100.2` rather than `100.3`. Parsing back folds `-0.0`
/// into `0.0`.
fn line_key(top: f64) -> i64 {
    let rounded: f64 = format!("{top:.1}").parse().unwrap_or(top);
    (rounded * 10.0).round() as i64
}
