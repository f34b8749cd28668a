use crate::extract::title_case;
use crate::patterns::PatternLibrary;
use crate::record::NavigationInfo;

const MAX_LINKS: usize = 10;

extractor!(NavigationExtractor, "navigation", extract, Navigation);

/// In-page anchor links plus which canonical menu items the page mentions.
pub fn extract(text: &str, patterns: &PatternLibrary) -> NavigationInfo {
    let detected_links = patterns
        .anchor_link
        .captures_iter(text)
        .take(MAX_LINKS)
        .map(|caps| caps[1].to_string())
        .collect();

    let lower = text.to_lowercase();
    let likely_menu_items = patterns
        .nav_items
        .iter()
        .filter(|item| lower.contains(**item))
        .map(|item| title_case(item))
        .collect();

    NavigationInfo {
        detected_links,
        likely_menu_items,
    }
}
