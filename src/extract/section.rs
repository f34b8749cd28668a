use indexmap::IndexMap;

use crate::patterns::PatternLibrary;
use crate::record::SectionMatch;

extractor!(SectionExtractor, "sections", extract, Sections);

/// Flags page regions by keyword presence.
///
/// Confidence is `matched / total * 2`, capped at 1.0, so half the keyword
/// list is enough for full confidence. Sections with no hits are omitted;
/// the rest keep table order.
pub fn extract(text: &str, patterns: &PatternLibrary) -> IndexMap<String, SectionMatch> {
    let lower = text.to_lowercase();

    patterns
        .sections
        .iter()
        .filter_map(|(section, keywords)| {
            let matched: Vec<String> = keywords
                .iter()
                .filter(|kw| lower.contains(**kw))
                .map(|kw| kw.to_string())
                .collect();
            if matched.is_empty() {
                return None;
            }
            let confidence = (matched.len() as f64 / keywords.len() as f64 * 2.0).min(1.0);
            Some((
                section.to_string(),
                SectionMatch {
                    found: true,
                    matched_keywords: matched,
                    confidence,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(text: &str) -> IndexMap<String, SectionMatch> {
        extract(text, PatternLibrary::standard())
    }

    #[test]
    fn keywords_in_table_order() {
        let s = sections("Frequently Asked Questions ... FAQ");
        let faq = &s["faq"];
        assert_eq!(faq.matched_keywords, vec!["faq", "frequently asked", "questions"]);
        assert_eq!(faq.confidence, 1.0);
    }

    #[test]
    fn partial_match_confidence() {
        // one of five "gallery" keywords
        let s = sections("see our portfolio");
        assert!((s["gallery"].confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn keys_follow_table_order() {
        let s = sections("hero banner ... faq ... contact");
        let keys: Vec<&str> = s.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["hero", "contact", "faq"]);
    }

    #[test]
    fn undetected_sections_are_absent() {
        let s = sections("zzz");
        assert!(s.is_empty());
    }

    #[test]
    fn confidence_is_bounded() {
        let s = sections(include_str!("../../tests/fixtures/smile_clinic.md"));
        assert!(!s.is_empty());
        for m in s.values() {
            assert!(m.found);
            assert!(m.confidence > 0.0 && m.confidence <= 1.0);
        }
    }
}
