use std::collections::BTreeSet;

use crate::patterns::PatternLibrary;
use crate::record::FontInfo;

extractor!(FontExtractor, "fonts", extract, Fonts);

/// Collects typefaces from Google Fonts links and `font-family` rules.
///
/// Link-sourced names win when picking `primary`/`secondary`.
pub fn extract(text: &str, patterns: &PatternLibrary) -> FontInfo {
    let google_fonts: Vec<String> = patterns
        .google_fonts
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| families_from_query(m.as_str()))
        .collect();

    let css_list: Vec<String> = patterns
        .font_family
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| {
            m.as_str()
                .split(',')
                .map(|f| f.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
                .collect::<Vec<_>>()
        })
        .filter(|f| !f.is_empty() && !patterns.is_generic_font(f))
        .collect();

    let mut ordered: Vec<&String> = Vec::new();
    for name in google_fonts.iter().chain(css_list.iter()) {
        if !ordered.contains(&name) {
            ordered.push(name);
        }
    }
    let primary = ordered.first().map(|s| s.to_string());
    let secondary = ordered.get(1).map(|s| s.to_string());

    FontInfo {
        css_fonts: css_list.iter().cloned().collect::<BTreeSet<_>>(),
        google_fonts,
        primary,
        secondary,
    }
}

/// `Open+Sans:wght@400|Roboto` -> `["Open Sans", "Roboto"]`
fn families_from_query(query: &str) -> Vec<String> {
    query
        .replace('+', " ")
        .split('|')
        .filter_map(|family| {
            let name = family.split(':').next().unwrap_or("").trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
