//! Merges an analysis with caller-supplied business facts into a site config.
//!
//! Every field is resolved through an explicit lookup chain: the caller's
//! value first, then whatever the analysis found, then a fixed default.

use std::time::Instant;
use tracing::{info, warn};
use url::Url;

use crate::business::BusinessInput;
use crate::defaults::DefaultTables;
use crate::error::Result;
use crate::record::AnalysisRecord;
use crate::site_config::{
    BusinessInfo, ColorTokens, ConfigDocument, Design, Doctor, FontTokens, Seo, SourceAnalysis,
};

/// Canonical page order; detected sections are emitted in this order.
pub const SECTION_PRIORITY: &[&str] = &[
    "navigation",
    "hero",
    "services",
    "about",
    "doctors",
    "why_choose_us",
    "testimonials",
    "gallery",
    "pricing",
    "faq",
    "contact",
    "hours",
    "map",
    "footer",
];

pub const FALLBACK_SECTIONS: &[&str] = &[
    "navigation",
    "hero",
    "services",
    "about",
    "testimonials",
    "contact",
    "footer",
];

pub const DEFAULT_PRIMARY_COLOR: &str = "#2563EB";
pub const DEFAULT_SECONDARY_COLOR: &str = "#10B981";
pub const DEFAULT_ACCENT_COLOR: &str = "#F59E0B";
const BACKGROUND_COLOR: &str = "#FFFFFF";
const TEXT_COLOR: &str = "#1E293B";
const MUTED_COLOR: &str = "#64748B";

pub const DEFAULT_PRIMARY_FONT: &str = "Inter";
pub const DEFAULT_SECONDARY_FONT: &str = "Poppins";

pub const FALLBACK_NAVIGATION: &[&str] = &["Home", "Services", "About", "Contact"];
pub const FALLBACK_CTAS: &[&str] = &["Book Appointment", "Call Now"];

const CITY_PLACEHOLDER: &str = "Your City";
const NO_REFERENCE: &str = "N/A";

/// First candidate holding a value wins, otherwise `fallback`.
fn resolve<T>(chain: impl IntoIterator<Item = Option<T>>, fallback: T) -> T {
    chain.into_iter().flatten().next().unwrap_or(fallback)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

pub struct Synthesizer<'d> {
    defaults: &'d DefaultTables,
}

impl Default for Synthesizer<'static> {
    fn default() -> Self {
        Synthesizer::new(DefaultTables::embedded())
    }
}

impl<'d> Synthesizer<'d> {
    pub fn new(defaults: &'d DefaultTables) -> Self {
        Synthesizer { defaults }
    }

    pub fn synthesize(
        &self,
        analysis: &AnalysisRecord,
        business: &BusinessInput,
    ) -> Result<ConfigDocument> {
        business.validate()?;

        let start_time = Instant::now();
        info!(
            action = "start",
            component = "synthesizer",
            business = %business.name,
            "Starting config synthesis"
        );

        let name = business.name.as_str();
        let brand = &analysis.colors.brand_colors;
        let sections = section_order(analysis);

        let document = ConfigDocument {
            business: BusinessInfo {
                name: name.to_string(),
                tagline: resolve(
                    [BusinessInput::optional(&business.tagline).map(str::to_string)],
                    self.defaults.default_tagline().to_string(),
                ),
                phone: business.phone.clone(),
                email: resolve(
                    [BusinessInput::optional(&business.email).map(str::to_string)],
                    default_email(name),
                ),
                address: business.address.clone(),
                whatsapp: whatsapp_number(&business.phone),
                whatsapp_message: self.defaults.whatsapp_message.clone(),
                working_hours: self.defaults.working_hours.clone(),
                google_maps_embed: None,
            },
            doctors: vec![self.doctor(business)],
            services: self.defaults.services.clone(),
            testimonials: self.defaults.testimonials.clone(),
            design: Design {
                colors: ColorTokens {
                    primary: resolve([brand.first().cloned()], DEFAULT_PRIMARY_COLOR.into()),
                    secondary: resolve([brand.get(1).cloned()], DEFAULT_SECONDARY_COLOR.into()),
                    accent: resolve([brand.get(2).cloned()], DEFAULT_ACCENT_COLOR.into()),
                    background: BACKGROUND_COLOR.into(),
                    text: TEXT_COLOR.into(),
                    muted: MUTED_COLOR.into(),
                },
                fonts: FontTokens {
                    primary: resolve(
                        [analysis.fonts.primary.clone()],
                        DEFAULT_PRIMARY_FONT.into(),
                    ),
                    secondary: resolve(
                        [analysis.fonts.secondary.clone()],
                        DEFAULT_SECONDARY_FONT.into(),
                    ),
                },
                style_keywords: self.defaults.style_keywords.clone(),
            },
            ctas: resolve([non_empty(&analysis.ctas)], owned(FALLBACK_CTAS)),
            navigation: resolve(
                [non_empty(&analysis.navigation.likely_menu_items)],
                owned(FALLBACK_NAVIGATION),
            ),
            seo: seo(name, &business.address),
            source_analysis: SourceAnalysis {
                reference_url: reference_url(business),
                detected_sections_count: sections.len(),
                colors_extracted: brand.len(),
                fonts_detected: analysis.fonts.primary.is_some(),
            },
            sections,
        };

        info!(
            action = "complete",
            component = "synthesizer",
            section_count = document.sections.len(),
            colors_extracted = document.source_analysis.colors_extracted,
            duration_ms = start_time.elapsed().as_millis(),
            "Config synthesis completed"
        );
        Ok(document)
    }

    fn doctor(&self, business: &BusinessInput) -> Doctor {
        let profile = &self.defaults.doctor;
        let fallback = format!(
            "Dr. {}",
            business.name.split_whitespace().next().unwrap_or_default()
        );
        Doctor {
            name: resolve(
                [BusinessInput::optional(&business.doctor).map(str::to_string)],
                fallback,
            ),
            title: profile.title.clone(),
            specialization: profile.specialization.clone(),
            experience: profile.experience.clone(),
            bio: profile.bio.replace("{business}", &business.name),
        }
    }
}

/// Synthesizes with the embedded default tables.
pub fn synthesize(analysis: &AnalysisRecord, business: &BusinessInput) -> Result<ConfigDocument> {
    Synthesizer::default().synthesize(analysis, business)
}

fn section_order(analysis: &AnalysisRecord) -> Vec<String> {
    let detected: Vec<String> = SECTION_PRIORITY
        .iter()
        .filter(|s| analysis.has_section(s))
        .map(|s| s.to_string())
        .collect();
    resolve([non_empty(&detected)], owned(FALLBACK_SECTIONS))
}

/// `Bright Smile Clinic` -> `info@brightsmileclinic.com`
fn default_email(name: &str) -> String {
    format!("info@{}.com", name.to_lowercase().replace(' ', ""))
}

fn whatsapp_number(phone: &str) -> Option<String> {
    let digits = phone.replace([' ', '-'], "");
    (!digits.is_empty()).then_some(digits)
}

/// Second-to-last comma-separated address segment, e.g. the city in
/// `12 MG Road, Indiranagar, Bengaluru, 560038`.
fn city_from_address(address: &str) -> &str {
    if address.contains(',') {
        address.rsplit(',').nth(1).map(str::trim).unwrap_or(CITY_PLACEHOLDER)
    } else {
        CITY_PLACEHOLDER
    }
}

fn seo(name: &str, address: &str) -> Seo {
    let city = city_from_address(address);
    Seo {
        title: format!("{name} - Best Dental Clinic in {city}"),
        description: format!(
            "{name} offers professional dental care including teeth cleaning, root canal, \
             implants, braces and more. Book your appointment today!"
        ),
        keywords: format!(
            "dentist, dental clinic, {name}, teeth cleaning, root canal, dental implants"
        ),
    }
}

fn reference_url(business: &BusinessInput) -> String {
    match BusinessInput::optional(&business.reference_url) {
        Some(raw) => match Url::parse(raw) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(action = "parse", component = "reference_url", url = raw, error = %e, "Keeping reference URL verbatim");
                raw.to_string()
            }
        },
        None => NO_REFERENCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::SectionMatch;

    fn clinic() -> BusinessInput {
        BusinessInput::new(
            "Bright Smile Clinic",
            "+91 98765-43210",
            "12 MG Road, Indiranagar, Bengaluru, 560038",
        )
    }

    fn detected(names: &[&str]) -> AnalysisRecord {
        let mut record = AnalysisRecord::default();
        for name in names {
            record.sections.insert(
                name.to_string(),
                SectionMatch {
                    found: true,
                    matched_keywords: vec![name.to_string()],
                    confidence: 0.4,
                },
            );
        }
        record
    }

    #[test]
    fn missing_name_fails_validation() {
        let err = synthesize(&AnalysisRecord::default(), &BusinessInput::new("", "x", "y"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "name" }));
    }

    #[test]
    fn empty_analysis_uses_every_fallback() {
        let doc = synthesize(&AnalysisRecord::default(), &clinic()).unwrap();
        assert_eq!(doc.design.colors.primary, "#2563EB");
        assert_eq!(doc.design.colors.secondary, "#10B981");
        assert_eq!(doc.design.colors.accent, "#F59E0B");
        assert_eq!(doc.design.fonts.primary, "Inter");
        assert_eq!(doc.design.fonts.secondary, "Poppins");
        assert_eq!(doc.sections, owned(FALLBACK_SECTIONS));
        assert_eq!(doc.navigation, owned(FALLBACK_NAVIGATION));
        assert_eq!(doc.ctas, owned(FALLBACK_CTAS));
        assert_eq!(doc.source_analysis.detected_sections_count, 7);
        assert_eq!(doc.source_analysis.colors_extracted, 0);
        assert!(!doc.source_analysis.fonts_detected);
        assert_eq!(doc.source_analysis.reference_url, "N/A");
    }

    #[test]
    fn brand_colors_map_positionally() {
        let mut analysis = AnalysisRecord::default();
        analysis.colors.brand_colors = vec!["#0ea5e9".into(), "#f43f5e".into()];
        let doc = synthesize(&analysis, &clinic()).unwrap();
        assert_eq!(doc.design.colors.primary, "#0ea5e9");
        assert_eq!(doc.design.colors.secondary, "#f43f5e");
        assert_eq!(doc.design.colors.accent, DEFAULT_ACCENT_COLOR);
        assert_eq!(doc.source_analysis.colors_extracted, 2);
    }

    #[test]
    fn sections_follow_canonical_priority() {
        let doc = synthesize(&detected(&["contact", "hero", "cta"]), &clinic()).unwrap();
        assert_eq!(doc.sections, vec!["hero", "contact"]);
    }

    #[test]
    fn derived_business_fields() {
        let doc = synthesize(&AnalysisRecord::default(), &clinic()).unwrap();
        assert_eq!(doc.business.email, "info@brightsmileclinic.com");
        assert_eq!(doc.business.whatsapp.as_deref(), Some("+919876543210"));
        assert_eq!(doc.business.tagline, "Your Smile, Our Priority");
        assert_eq!(doc.doctors[0].name, "Dr. Bright");
        assert!(doc.doctors[0].bio.ends_with("best care at Bright Smile Clinic."));
        assert_eq!(doc.seo.title, "Bright Smile Clinic - Best Dental Clinic in Bengaluru");
        assert_eq!(doc.services.len(), 10);
        assert_eq!(doc.testimonials.len(), 3);
        assert!(doc.business.google_maps_embed.is_none());
    }

    #[test]
    fn caller_values_win() {
        let mut business = clinic();
        business.email = Some("desk@bright.in".into());
        business.doctor = Some("Dr. Meera Rao".into());
        business.tagline = Some("Smiles for miles".into());
        business.reference_url = Some("https://Example.com".into());
        let doc = synthesize(&AnalysisRecord::default(), &business).unwrap();
        assert_eq!(doc.business.email, "desk@bright.in");
        assert_eq!(doc.doctors[0].name, "Dr. Meera Rao");
        assert_eq!(doc.business.tagline, "Smiles for miles");
        assert_eq!(doc.source_analysis.reference_url, "https://example.com/");
    }

    #[test]
    fn city_extraction() {
        assert_eq!(city_from_address("Shop 4, Sector 17, Chandigarh"), "Sector 17");
        assert_eq!(city_from_address("Pune, 411001"), "Pune");
        assert_eq!(city_from_address("Main Street"), "Your City");
    }

    #[test]
    fn unparseable_reference_url_is_kept() {
        let mut business = clinic();
        business.reference_url = Some("old site".into());
        let doc = synthesize(&AnalysisRecord::default(), &business).unwrap();
        assert_eq!(doc.source_analysis.reference_url, "old site");
    }

    #[test]
    fn deterministic() {
        let analysis = detected(&["hero", "faq"]);
        let a = serde_json::to_string(&synthesize(&analysis, &clinic()).unwrap()).unwrap();
        let b = serde_json::to_string(&synthesize(&analysis, &clinic()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
