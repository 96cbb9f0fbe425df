//! Structural patterns for validated fields.

use std::sync::LazyLock;

use bizrec_model::FieldPattern;
use regex::Regex;

static DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._-]*$").expect("Invalid domain regex"));

// `E` tolerates phones that went through a float parse upstream (`1.555E9`).
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9E.+]*$").expect("Invalid phone regex"));

/// Whether a present value fully matches `pattern`.
pub fn matches_pattern(value: &str, pattern: FieldPattern) -> bool {
    match pattern {
        FieldPattern::Domain => DOMAIN_REGEX.is_match(value),
        FieldPattern::Phone => PHONE_REGEX.is_match(value),
    }
}

/// Whether a phone value only passed validation through the scientific
/// notation allowance.
pub fn is_suspect_phone(value: &str) -> bool {
    value.contains('E') && matches_pattern(value, FieldPattern::Phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_pattern() {
        assert!(matches_pattern("acme.com", FieldPattern::Domain));
        assert!(matches_pattern("my-shop_2.co.uk", FieldPattern::Domain));
        assert!(matches_pattern("", FieldPattern::Domain));
        assert!(!matches_pattern("Acme.com", FieldPattern::Domain));
        assert!(!matches_pattern("acme com", FieldPattern::Domain));
        assert!(!matches_pattern("acme.com/path", FieldPattern::Domain));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(matches_pattern("+15551234", FieldPattern::Phone));
        assert!(matches_pattern("15551234.0", FieldPattern::Phone));
        assert!(matches_pattern("1.5551234E10", FieldPattern::Phone));
        assert!(!matches_pattern("555-1234", FieldPattern::Phone));
        assert!(!matches_pattern("(555) 1234", FieldPattern::Phone));
    }

    #[test]
    fn test_suspect_phone() {
        assert!(is_suspect_phone("1.5551234E10"));
        assert!(!is_suspect_phone("15551234"));
        assert!(!is_suspect_phone("E-1"));
    }
}
