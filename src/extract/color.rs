use std::collections::{HashMap, HashSet};

use crate::patterns::PatternLibrary;
use crate::record::ColorInfo;

const MAX_COLORS: usize = 20;
const MAX_BRAND_COLORS: usize = 6;

extractor!(ColorExtractor, "colors", extract, Colors);

/// Ranks hex, rgb, rgba and hsl colors by how often they appear.
pub fn extract(text: &str, patterns: &PatternLibrary) -> ColorInfo {
    let raw: Vec<&str> = [
        &patterns.hex_color,
        &patterns.rgb_color,
        &patterns.rgba_color,
        &patterns.hsl_color,
    ]
    .into_iter()
    .flat_map(|re| re.find_iter(text).map(|m| m.as_str()))
    .collect();

    let total_unique = raw.iter().collect::<HashSet<_>>().len();

    // (color, count) in first-seen order, so the stable sort below breaks
    // ties by appearance.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for color in raw {
        let lower = color.to_lowercase();
        match index.get(&lower) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(lower.clone(), counts.len());
                counts.push((lower, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let all_colors = counts
        .iter()
        .take(MAX_COLORS)
        .map(|(c, _)| c.clone())
        .collect();
    let brand_colors = counts
        .iter()
        .filter(|(c, _)| !patterns.is_default_color(c))
        .take(MAX_BRAND_COLORS)
        .map(|(c, _)| c.clone())
        .collect();

    ColorInfo {
        all_colors,
        brand_colors,
        total_unique,
    }
}
