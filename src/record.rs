use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMatch {
    pub found: bool,
    pub matched_keywords: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorInfo {
    pub all_colors: Vec<String>,
    pub brand_colors: Vec<String>,
    pub total_unique: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontInfo {
    pub google_fonts: Vec<String>,
    pub css_fonts: BTreeSet<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationInfo {
    pub detected_links: Vec<String>,
    pub likely_menu_items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phones: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    pub addresses: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStats {
    pub total_length: usize,
    pub line_count: usize,
    pub word_count: usize,
    pub has_forms: bool,
    pub has_map: bool,
    pub has_video: bool,
}

/// Everything the analyzer learned about one page.
///
/// Deserializes leniently: a missing block falls back to its empty value so
/// hand-edited analysis files still feed the synthesizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRecord {
    /// Detected sections only, in pattern-table order.
    pub sections: IndexMap<String, SectionMatch>,
    pub colors: ColorInfo,
    pub fonts: FontInfo,
    pub headings: Vec<Heading>,
    pub navigation: NavigationInfo,
    pub ctas: Vec<String>,
    pub contact_info: ContactInfo,
    pub images: Vec<ImageRef>,
    pub content_stats: ContentStats,
}

impl AnalysisRecord {
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.get(name).is_some_and(|s| s.found)
    }
}
