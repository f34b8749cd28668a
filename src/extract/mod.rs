//! Independent heuristic extractors.
//!
//! Each extractor reads the raw page text and the shared [`PatternLibrary`]
//! and produces one piece of the [`AnalysisRecord`]. None of them looks at
//! another extractor's output, so they can run in any order or in parallel.

/// Wires a plain `fn(&str, &PatternLibrary) -> T` up as a named [`Extractor`].
macro_rules! extractor {
    ($ty:ident, $name:literal, $func:path, $variant:ident) => {
        pub struct $ty;

        impl $crate::extract::Extractor for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn extract(
                &self,
                text: &str,
                patterns: &$crate::patterns::PatternLibrary,
            ) -> $crate::extract::Extraction {
                $crate::extract::Extraction::$variant($func(text, patterns))
            }
        }
    };
}

pub mod color;
pub mod contact;
pub mod cta;
pub mod font;
pub mod heading;
pub mod image;
pub mod navigation;
pub mod section;
pub mod stats;

use indexmap::IndexMap;

use crate::patterns::PatternLibrary;
use crate::record::{
    AnalysisRecord, ColorInfo, ContactInfo, ContentStats, FontInfo, Heading, ImageRef,
    NavigationInfo, SectionMatch,
};

/// One extractor's contribution to the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Sections(IndexMap<String, SectionMatch>),
    Colors(ColorInfo),
    Fonts(FontInfo),
    Headings(Vec<Heading>),
    Navigation(NavigationInfo),
    Ctas(Vec<String>),
    Contact(ContactInfo),
    Images(Vec<ImageRef>),
    Stats(ContentStats),
}

impl Extraction {
    /// Moves this contribution into its slot on the record.
    pub fn apply(self, record: &mut AnalysisRecord) {
        match self {
            Extraction::Sections(v) => record.sections = v,
            Extraction::Colors(v) => record.colors = v,
            Extraction::Fonts(v) => record.fonts = v,
            Extraction::Headings(v) => record.headings = v,
            Extraction::Navigation(v) => record.navigation = v,
            Extraction::Ctas(v) => record.ctas = v,
            Extraction::Contact(v) => record.contact_info = v,
            Extraction::Images(v) => record.images = v,
            Extraction::Stats(v) => record.content_stats = v,
        }
    }
}

pub trait Extractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, text: &str, patterns: &PatternLibrary) -> Extraction;
}

/// The full extractor set, in record field order.
pub fn standard_extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(section::SectionExtractor),
        Box::new(color::ColorExtractor),
        Box::new(font::FontExtractor),
        Box::new(heading::HeadingExtractor),
        Box::new(navigation::NavigationExtractor),
        Box::new(cta::CtaExtractor),
        Box::new(contact::ContactExtractor),
        Box::new(image::ImageExtractor),
        Box::new(stats::StatsExtractor),
    ]
}

/// Title-cases the way the CTA and nav tables are displayed: a letter is
/// upper-cased when it follows a non-letter, lower-cased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_table_display() {
        assert_eq!(title_case("book now"), "Book Now");
        assert_eq!(title_case("whatsapp"), "Whatsapp");
        assert_eq!(title_case("why_choose us"), "Why_Choose Us");
    }

    #[test]
    fn extractor_names_are_unique() {
        let extractors = standard_extractors();
        let mut names: Vec<_> = extractors.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), extractors.len());
    }
}
