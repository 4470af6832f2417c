use std::collections::{HashMap, HashSet};

/// A line is boilerplate once it occurs more than this many times.
pub const REPEAT_THRESHOLD: usize = 2;

/// Document-wide count of every exact line string.
#[derive(Debug, Default)]
pub struct LineFrequency<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> LineFrequency<'a> {
    /// Count lines across all pages. Matching is exact: case and spacing matter.
    pub fn from_pages(pages: &'a [Vec<String>]) -> Self {
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        for line in pages.iter().flatten() {
            *counts.entry(line.as_str()).or_insert(0) += 1;
        }
        LineFrequency { counts }
    }

    pub fn count(&self, line: &str) -> usize {
        self.counts.get(line).copied().unwrap_or(0)
    }

    /// Lines repeated often enough to be running headers or footers.
    pub fn repeating_lines(&self) -> HashSet<&'a str> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > REPEAT_THRESHOLD)
            .map(|(&line, _)| line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|lines| lines.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_three_occurrences_repeat() {
        let p = pages(&[&["Header", "a"], &["Header", "b"], &["Header", "c"]]);
        let freq = LineFrequency::from_pages(&p);
        assert_eq!(freq.count("Header"), 3);
        assert_eq!(freq.repeating_lines(), HashSet::from(["Header"]));
    }

    #[test]
    fn test_two_occurrences_do_not_repeat() {
        let p = pages(&[&["Header", "a"], &["Header", "b"], &["c"]]);
        let freq = LineFrequency::from_pages(&p);
        assert!(freq.repeating_lines().is_empty());
    }

    #[test]
    fn test_repeats_within_one_page_count() {
        let p = pages(&[&["* * *", "x", "* * *", "y", "* * *"]]);
        let freq = LineFrequency::from_pages(&p);
        assert_eq!(freq.repeating_lines(), HashSet::from(["* * *"]));
    }

    #[test]
    fn test_matching_is_exact() {
        let p = pages(&[&["Page Header"], &["page header"], &["Page  Header"]]);
        let freq = LineFrequency::from_pages(&p);
        assert_eq!(freq.count("Page Header"), 1);
        assert!(freq.repeating_lines().is_empty());
    }

    #[test]
    fn test_empty_document() {
        let p: Vec<Vec<String>> = Vec::new();
        let freq = LineFrequency::from_pages(&p);
        assert_eq!(freq.count("anything"), 0);
        assert!(freq.repeating_lines().is_empty());
    }
}
