//! Heuristic company-name / website identity matching.
//!
//! Pre-flight sanity check confirming that a user-entered company name
//! plausibly corresponds to the website URL they entered. Pure domain
//! logic — no I/O, just string normalization and containment rules.
//!
//! The result is advisory: callers may let the user proceed despite a
//! mismatch.

/// Legal-entity suffixes stripped from the end of a normalized company
/// name. Ordered longest-first so "corporation" is not eaten by "corp".
const LEGAL_SUFFIXES: [&str; 8] = [
    "corporation",
    "limited",
    "company",
    "corp",
    "llc",
    "ltd",
    "inc",
    "co",
];

/// Check whether a company name plausibly matches a website URL.
///
/// Returns `true` (validation skipped, not failed) when either input is
/// empty or whitespace-only. Otherwise the match succeeds when any of
/// the following holds:
///
/// 1. The normalized name equals the normalized URL label.
/// 2. Both normalized forms are at least 3 characters and one contains
///    the other.
/// 3. Any individual word of the original name (alphanumerics only,
///    at least 3 characters) appears in the URL label.
/// 4. The name has more than one word and the acronym of its word
///    initials (at least 2 characters) appears in the URL label.
pub fn matches(company_name: &str, website_url: &str) -> bool {
    if company_name.trim().is_empty() || website_url.trim().is_empty() {
        return true;
    }

    let name = normalize_company_name(company_name);
    let label = normalize_url_label(website_url);

    if name == label {
        return true;
    }

    if name.len() >= 3 && label.len() >= 3 && (label.contains(&name) || name.contains(&label)) {
        return true;
    }

    for word in company_name.split_whitespace() {
        let word: String = word
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        if word.len() >= 3 && label.contains(&word) {
            return true;
        }
    }

    let words: Vec<&str> = company_name.split_whitespace().collect();
    if words.len() > 1 {
        let acronym: String = words
            .iter()
            .filter_map(|w| w.chars().find(char::is_ascii_alphanumeric))
            .collect::<String>()
            .to_lowercase();
        if acronym.len() >= 2 && label.contains(&acronym) {
            return true;
        }
    }

    false
}

/// Lowercase, drop everything but alphanumerics, then strip one trailing
/// legal-entity suffix (unless that would leave nothing).
fn normalize_company_name(name: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    for suffix in LEGAL_SUFFIXES {
        if let Some(stripped) = normalized.strip_suffix(suffix)
            && !stripped.is_empty()
        {
            return stripped.to_string();
        }
    }

    normalized
}

/// Reduce a URL to its first host label: lowercase, drop the scheme and
/// a leading "www.", take everything before the first ".", then keep
/// alphanumerics only.
fn normalize_url_label(url: &str) -> String {
    let lowered = url.trim().to_lowercase();
    let host = match lowered.split_once("://") {
        Some((_, rest)) => rest,
        None => lowered.as_str(),
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or("");
    label.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Match rules ====================

    #[test]
    fn exact_normalized_match() {
        assert!(matches("CloudZero", "https://www.cloudzero.com"));
    }

    #[test]
    fn unrelated_name_and_url_do_not_match() {
        assert!(!matches("Acme Corp", "https://www.globex.com"));
    }

    #[test]
    fn acronym_match() {
        assert!(matches("International Business Machines", "https://ibm.com"));
    }

    #[test]
    fn validation_skipped_when_url_empty() {
        assert!(matches("Anything", ""));
        assert!(matches("Anything", "   "));
    }

    #[test]
    fn validation_skipped_when_name_empty() {
        assert!(matches("", "https://example.com"));
    }

    #[test]
    fn substring_match_either_direction() {
        // Name contained in label
        assert!(matches("Stripe", "https://stripepayments.io"));
        // Label contained in name
        assert!(matches("Datadog Monitoring", "https://datadog.com"));
    }

    #[test]
    fn word_match_requires_three_characters() {
        assert!(matches("Red Ventures Holdings", "https://ventures.net"));
        // "Go" is too short to count as a word match
        assert!(!matches("Go X", "https://gq.com"));
    }

    #[test]
    fn legal_suffix_is_stripped() {
        assert!(matches("Globex Corporation", "https://globex.com"));
        assert!(matches("Initech LLC", "http://initech.io"));
        assert!(matches("Wayne Enterprises Inc", "https://wayneenterprises.com"));
    }

    #[test]
    fn suffix_only_name_is_not_stripped_to_nothing() {
        // "Co" normalizes to "co"; stripping would leave an empty string,
        // so the suffix is kept and compared as-is.
        assert!(matches("Co", "https://co.com"));
    }

    // ==================== Normalization ====================

    #[test]
    fn normalize_company_name_drops_punctuation_and_spaces() {
        assert_eq!(normalize_company_name("Cloud-Zero, Inc."), "cloudzero");
        assert_eq!(normalize_company_name("A&B Holdings"), "abholdings");
    }

    #[test]
    fn normalize_url_label_takes_first_label() {
        assert_eq!(normalize_url_label("https://www.cloudzero.com"), "cloudzero");
        assert_eq!(normalize_url_label("http://app.globex.co.uk"), "app");
        assert_eq!(normalize_url_label("globex.com"), "globex");
        assert_eq!(normalize_url_label("HTTPS://WWW.GLOBEX.COM/about"), "globex");
    }
}
