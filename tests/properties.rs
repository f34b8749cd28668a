//! Property-based checks for the analyzer and synthesizer.

use proptest::prelude::*;
use sitecloner::{analyze, synthesize, BusinessInput};

proptest! {
    #[test]
    fn non_blank_text_always_analyzes(text in "\\PC*[a-zA-Z0-9#]\\PC*") {
        prop_assert!(analyze(&text).is_ok());
    }

    #[test]
    fn analysis_is_deterministic(text in "[ -~\\n]{1,400}") {
        prop_assume!(!text.trim().is_empty());
        let a = analyze(&text).unwrap();
        let b = analyze(&text).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn section_confidence_is_bounded(text in "(hero|menu|faq|price|map|review|contact|[a-z ]{0,12}){1,20}") {
        prop_assume!(!text.trim().is_empty());
        let record = analyze(&text).unwrap();
        for m in record.sections.values() {
            prop_assert!(m.found);
            prop_assert!(m.confidence > 0.0 && m.confidence <= 1.0);
        }
    }

    #[test]
    fn caps_are_respected(text in "(#[0-9a-f]{6} |9[0-9]{9} |[a-z]{3}@x\\.io |!\\[a\\]\\(/[a-z]\\.png\\) ){0,60}") {
        prop_assume!(!text.trim().is_empty());
        let record = analyze(&text).unwrap();
        prop_assert!(record.colors.all_colors.len() <= 20);
        prop_assert!(record.colors.brand_colors.len() <= 6);
        prop_assert!(record.contact_info.phones.len() <= 5);
        prop_assert!(record.contact_info.emails.len() <= 5);
        prop_assert!(record.images.len() <= 20);
    }

    #[test]
    fn synthesis_with_required_fields_succeeds(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        phone in "[0-9 -]{0,5}[0-9]{5}",
        address in "[A-Za-z0-9 ,]{0,30}[A-Za-z]",
    ) {
        let analysis = analyze("Welcome to our clinic").unwrap();
        let doc = synthesize(&analysis, &BusinessInput::new(name.clone(), phone, address)).unwrap();
        prop_assert_eq!(&doc.business.name, &name);
        prop_assert!(doc.doctors[0].name.starts_with("Dr. "));
        prop_assert!(!doc.sections.is_empty());
    }
}
