use crate::patterns::PatternLibrary;
use crate::record::Heading;

extractor!(HeadingExtractor, "headings", extract, Headings);

/// Markdown `#` headings followed by inline `<hN>` tags. The two notations
/// are concatenated as-is, so mixed sources may list a heading twice.
pub fn extract(text: &str, patterns: &PatternLibrary) -> Vec<Heading> {
    let markdown = patterns.markdown_heading.captures_iter(text).map(|caps| Heading {
        level: caps[1].len() as u8,
        text: caps[2].trim().to_string(),
    });

    let html = patterns
        .html_heading
        .captures_iter(text)
        .filter_map(|caps| {
            let level = caps[1].parse().ok()?;
            Some(Heading {
                level,
                text: caps[2].trim().to_string(),
            })
        });

    markdown.chain(html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(text: &str) -> Vec<(u8, String)> {
        extract(text, PatternLibrary::standard())
            .into_iter()
            .map(|h| (h.level, h.text))
            .collect()
    }

    #[test]
    fn markdown_levels() {
        let h = headings("# Welcome\nbody\n### Our Services  \n####### too deep");
        assert_eq!(
            h,
            vec![(1, "Welcome".to_string()), (3, "Our Services".to_string())]
        );
    }

    #[test]
    fn markdown_before_html() {
        let h = headings("<H2 class=\"title\"> Meet Our Team </h2>\n## Contact");
        assert_eq!(
            h,
            vec![(2, "Contact".to_string()), (2, "Meet Our Team".to_string())]
        );
    }

    #[test]
    fn nested_markup_is_skipped() {
        assert!(headings("<h1><span>Logo</span></h1>").is_empty());
    }
}
