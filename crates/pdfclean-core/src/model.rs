use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanPage {
    /// 1-based page number as it appears in the source document.
    pub page: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanDocument {
    /// All page texts joined by a blank line, in page order.
    pub full_text: String,
    pub pages: Vec<CleanPage>,
}
