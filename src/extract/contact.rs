use std::collections::BTreeSet;

use regex::Regex;

use crate::patterns::PatternLibrary;
use crate::record::ContactInfo;

const MAX_PHONES: usize = 5;
const MAX_EMAILS: usize = 5;
const MAX_ADDRESSES: usize = 3;

extractor!(ContactExtractor, "contact_info", extract, Contact);

/// Phones, emails and Indian-style street addresses.
///
/// The raw match list is truncated before deduplication, so repeats inside
/// the window can leave fewer entries than the cap.
pub fn extract(text: &str, patterns: &PatternLibrary) -> ContactInfo {
    ContactInfo {
        phones: capped_set(&patterns.phone, text, MAX_PHONES),
        emails: capped_set(&patterns.email, text, MAX_EMAILS),
        addresses: capped_set(&patterns.address, text, MAX_ADDRESSES),
    }
}

fn capped_set(re: &Regex, text: &str, cap: usize) -> BTreeSet<String> {
    re.find_iter(text)
        .take(cap)
        .map(|m| m.as_str().to_string())
        .collect()
}
