use crate::extract::title_case;
use crate::patterns::PatternLibrary;

extractor!(CtaExtractor, "ctas", extract, Ctas);

pub fn extract(text: &str, patterns: &PatternLibrary) -> Vec<String> {
    let lower = text.to_lowercase();
    patterns
        .ctas
        .iter()
        .filter(|phrase| lower.contains(**phrase))
        .map(|phrase| title_case(phrase))
        .collect()
}
