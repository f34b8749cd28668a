//! Fixed regex and keyword tables shared by every extractor.
//!
//! Everything here is compiled once and never mutated. Extractors borrow a
//! [`PatternLibrary`] instead of reaching for globals, so a caller can hand
//! the aggregator an alternate library in tests.

use regex::Regex;
use std::sync::LazyLock;

/// Colors treated as boilerplate rather than brand intent.
pub const DEFAULT_COLORS: &[&str] = &[
    "#000", "#fff", "#000000", "#ffffff", "#333", "#333333", "#666", "#999",
];

/// `font-family` values that name a generic family instead of a typeface.
pub const GENERIC_FONTS: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "inherit",
];

pub const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("hero", &["hero", "banner", "jumbotron", "welcome", "main-banner"]),
    ("navigation", &["nav", "navbar", "menu", "header"]),
    (
        "services",
        &["service", "treatment", "procedure", "what we offer", "our services"],
    ),
    (
        "about",
        &["about", "who we are", "our story", "our mission", "our clinic"],
    ),
    (
        "doctors",
        &["doctor", "dentist", "our team", "meet our", "specialist", "staff"],
    ),
    (
        "testimonials",
        &["testimonial", "review", "patient says", "what our patients", "feedback"],
    ),
    (
        "gallery",
        &["gallery", "photos", "before and after", "our work", "portfolio"],
    ),
    (
        "contact",
        &["contact", "get in touch", "reach us", "book appointment", "schedule"],
    ),
    ("pricing", &["pricing", "price", "cost", "fee", "plan"]),
    ("faq", &["faq", "frequently asked", "questions"]),
    ("footer", &["footer", "copyright", "all rights reserved"]),
    (
        "cta",
        &["book now", "call now", "schedule", "appointment", "get started", "whatsapp"],
    ),
    (
        "why_choose_us",
        &["why choose", "why us", "our advantage", "benefits"],
    ),
    ("insurance", &["insurance", "payment", "accepted plans"]),
    (
        "hours",
        &["hours", "timing", "schedule", "open", "working hours"],
    ),
    (
        "map",
        &["map", "location", "find us", "directions", "google map"],
    ),
];

pub const CTA_PHRASES: &[&str] = &[
    "book now",
    "book appointment",
    "schedule appointment",
    "call now",
    "call us",
    "contact us",
    "get started",
    "learn more",
    "sign up",
    "free consultation",
    "book online",
    "whatsapp",
    "chat with us",
    "request appointment",
    "visit us",
    "enquire now",
    "get in touch",
    "make an appointment",
];

pub const NAV_ITEMS: &[&str] = &[
    "home",
    "about",
    "services",
    "doctors",
    "team",
    "gallery",
    "testimonials",
    "contact",
    "blog",
    "faq",
    "pricing",
    "book",
];

/// Compiled pattern set borrowed by the extractors.
#[derive(Debug)]
pub struct PatternLibrary {
    pub hex_color: Regex,
    pub rgb_color: Regex,
    pub rgba_color: Regex,
    pub hsl_color: Regex,
    pub default_colors: &'static [&'static str],

    pub google_fonts: Regex,
    pub font_family: Regex,
    pub generic_fonts: &'static [&'static str],

    pub sections: &'static [(&'static str, &'static [&'static str])],
    pub ctas: &'static [&'static str],
    pub nav_items: &'static [&'static str],

    pub phone: Regex,
    pub email: Regex,
    pub address: Regex,

    pub markdown_heading: Regex,
    pub html_heading: Regex,
    pub markdown_image: Regex,
    pub html_img_tag: Regex,
    pub img_src: Regex,
    pub img_alt: Regex,
    pub anchor_link: Regex,

    pub has_forms: Regex,
    pub has_map: Regex,
    pub has_video: Regex,
}

static STANDARD: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::build);

impl PatternLibrary {
    /// The process-wide library used by [`crate::analyze`].
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD
    }

    fn build() -> Self {
        // All sources below are literals; a failure here is a programming error.
        let re = |src: &str| Regex::new(src).unwrap_or_else(|e| panic!("bad pattern {src}: {e}"));

        PatternLibrary {
            hex_color: re(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b"),
            rgb_color: re(r"rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)"),
            rgba_color: re(r"rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)"),
            hsl_color: re(r"hsl\(\s*\d+\s*,\s*\d+%?\s*,\s*\d+%?\s*\)"),
            default_colors: DEFAULT_COLORS,

            google_fonts: re(r#"fonts\.googleapis\.com/css2?\?family=([^"&\s]+)"#),
            font_family: re(r"font-family\s*:\s*([^;}{]+)"),
            generic_fonts: GENERIC_FONTS,

            sections: SECTION_KEYWORDS,
            ctas: CTA_PHRASES,
            nav_items: NAV_ITEMS,

            phone: re(r"(?:\+91[\s-]?)?(?:\d[\s-]?){10}"),
            email: re(r"[\w.+-]+@[\w-]+\.[\w.-]+"),
            address: re(
                r"(?i)\d+[,\s]+[\w\s]+(?:road|rd|street|st|nagar|colony|sector|block|market|chowk)[\w\s,.-]+\d{6}",
            ),

            markdown_heading: re(r"(?m)^(#{1,6})\s+(.+)$"),
            html_heading: re(r"(?i)<h([1-6])[^>]*>([^<]+)</h[1-6]>"),
            markdown_image: re(r"!\[([^\]]*)\]\(([^)]+)\)"),
            html_img_tag: re(r"(?i)<img\b[^>]*>"),
            // `data-src` and friends must not count as `src`.
            img_src: re(r#"(?i)(?:^|[\s<])src\s*=\s*["']([^"']+)["']"#),
            img_alt: re(r#"(?i)(?:^|[\s<])alt\s*=\s*["']([^"']*)["']"#),
            anchor_link: re(r"\[([^\]]+)\]\(#[^)]*\)"),

            has_forms: re(r"(?i)<form|form|input|submit"),
            has_map: re(r"(?i)google\.com/maps|maps\.google|iframe.*map"),
            has_video: re(r"(?i)youtube|vimeo|video|<video"),
        }
    }

    pub fn is_default_color(&self, color: &str) -> bool {
        self.default_colors.contains(&color)
    }

    pub fn is_generic_font(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.generic_fonts.iter().any(|g| *g == lower)
    }
}
