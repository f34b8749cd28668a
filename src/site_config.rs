//! The synthesized site configuration and the default-table entries it
//! embeds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

/// Opening hours, serialized in weekday order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: Option<String>,
    pub whatsapp_message: String,
    pub working_hours: WorkingHours,
    pub google_maps_embed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub experience: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontTokens {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub colors: ColorTokens,
    pub fonts: FontTokens,
    pub style_keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// How much of the analysis made it into the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAnalysis {
    pub reference_url: String,
    pub detected_sections_count: usize,
    pub colors_extracted: usize,
    pub fonts_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub business: BusinessInfo,
    pub doctors: Vec<Doctor>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub design: Design,
    pub sections: Vec<String>,
    pub ctas: Vec<String>,
    pub navigation: Vec<String>,
    pub seo: Seo,
    pub source_analysis: SourceAnalysis,
}
