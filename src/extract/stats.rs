use crate::patterns::PatternLibrary;
use crate::record::ContentStats;

extractor!(StatsExtractor, "content_stats", extract, Stats);

pub fn extract(text: &str, patterns: &PatternLibrary) -> ContentStats {
    ContentStats {
        total_length: text.chars().count(),
        line_count: text.matches('\n').count(),
        word_count: text.split_whitespace().count(),
        has_forms: patterns.has_forms.is_match(text),
        has_map: patterns.has_map.is_match(text),
        has_video: patterns.has_video.is_match(text),
    }
}
