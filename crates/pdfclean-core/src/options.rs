use crate::extraction::WordTolerance;

/// Tuning knobs for a single extraction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Words whose top edge lies above this distance from the page top are dropped.
    pub header_margin: f64,
    /// Words whose top edge lies below `height - footer_margin` are dropped.
    pub footer_margin: f64,
    /// Horizontal gap up to which the backend joins glyph runs into one word.
    pub x_tolerance: f64,
    /// Vertical offset up to which the backend treats glyph runs as one row.
    pub y_tolerance: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_margin: 50.0,
            footer_margin: 50.0,
            x_tolerance: 1.0,
            y_tolerance: 1.0,
        }
    }
}

impl ExtractOptions {
    pub fn word_tolerance(&self) -> WordTolerance {
        WordTolerance {
            x: self.x_tolerance,
            y: self.y_tolerance,
        }
    }
}
