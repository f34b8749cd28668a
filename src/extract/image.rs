use crate::patterns::PatternLibrary;
use crate::record::ImageRef;

const MAX_IMAGES: usize = 20;

extractor!(ImageExtractor, "images", extract, Images);

pub fn extract(text: &str, patterns: &PatternLibrary) -> Vec<ImageRef> {
    let markdown = patterns.markdown_image.captures_iter(text).map(|caps| ImageRef {
        src: caps[2].to_string(),
        alt: caps[1].to_string(),
    });

    let html = patterns.html_img_tag.find_iter(text).filter_map(|tag| {
        let tag = tag.as_str();
        let src = patterns.img_src.captures(tag)?.get(1)?.as_str().to_string();
        let alt = patterns
            .img_alt
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some(ImageRef { src, alt })
    });

    markdown.chain(html).take(MAX_IMAGES).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(text: &str) -> Vec<(String, String)> {
        extract(text, PatternLibrary::standard())
            .into_iter()
            .map(|i| (i.src, i.alt))
            .collect()
    }

    #[test]
    fn markdown_then_html() {
        let found = images(
            r#"<img alt="Clinic front" src="/front.jpg"> ![Dr. Rao](/rao.png)"#,
        );
        assert_eq!(
            found,
            vec![
                ("/rao.png".to_string(), "Dr. Rao".to_string()),
                ("/front.jpg".to_string(), "Clinic front".to_string()),
            ]
        );
    }

    #[test]
    fn html_alt_defaults_to_empty() {
        let found = images("<IMG SRC='/logo.svg' width=40>");
        assert_eq!(found, vec![("/logo.svg".to_string(), String::new())]);
    }

    #[test]
    fn lazy_loaded_data_attributes_are_ignored() {
        assert_eq!(
            images(r#"<img data-src="/lazy.jpg" src="/real.jpg" data-alt="no" alt="x">"#),
            vec![("/real.jpg".to_string(), "x".to_string())]
        );
    }

    #[test]
    fn img_without_src_is_skipped() {
        assert!(images("<img alt=\"nothing\">").is_empty());
    }

    #[test]
    fn truncates_across_both_sources() {
        let md = "![a](/a.png) ".repeat(15);
        let html = "<img src=\"/b.png\"> ".repeat(15);
        let found = images(&format!("{md}{html}"));
        assert_eq!(found.len(), MAX_IMAGES);
        assert_eq!(found[14].0, "/a.png");
        assert_eq!(found[15].0, "/b.png");
    }
}
