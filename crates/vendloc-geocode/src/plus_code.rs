//! Plus-Code detection and quarantine.
//!
//! Some providers substitute a short alphanumeric geocode (e.g.
//! `7JVW+2H`) for the street address in areas without formal
//! addressing. A code is never a usable display address on its own, so
//! the parser detects them, strips them from constructed addresses, and
//! only re-attaches them parenthetically when a locality is known.

use regex::Regex;

const PLUS_CODE_PATTERN: &str = r"(?i)[A-Z0-9]{2,}\+[A-Z0-9]{2,}";

fn plus_code_regex() -> Regex {
    Regex::new(PLUS_CODE_PATTERN).expect("valid regex")
}

/// Whether `text` contains a Plus Code anywhere.
#[must_use]
pub fn contains_plus_code(text: &str) -> bool {
    plus_code_regex().is_match(text)
}

/// The first Plus Code in `text`, if any.
#[must_use]
pub fn extract_plus_code(text: &str) -> Option<String> {
    plus_code_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// `text` with all Plus Codes removed and leftover comma/whitespace
/// debris tidied up.
#[must_use]
pub fn strip_plus_code(text: &str) -> String {
    let stripped = plus_code_regex().replace_all(text, "");
    stripped
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether a formatted address leads with a Plus Code instead of street
/// text (e.g. `"7JVW+2H Mumbai, Maharashtra"`). Such candidates are
/// deprioritized when selecting among provider results.
#[must_use]
pub fn is_bare_plus_code(formatted_address: &str) -> bool {
    let first_segment = formatted_address
        .split(',')
        .next()
        .unwrap_or(formatted_address)
        .trim();
    let anchored = format!(r"^{PLUS_CODE_PATTERN}(\s|$)");
    Regex::new(&anchored)
        .expect("valid regex")
        .is_match(first_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_code_with_trailing_locality() {
        assert!(contains_plus_code("7JVW+2H Mumbai"));
        assert_eq!(extract_plus_code("7JVW+2H Mumbai").as_deref(), Some("7JVW+2H"));
    }

    #[test]
    fn plain_street_address_is_not_a_code() {
        assert!(!contains_plus_code("123 Main St"));
        assert_eq!(extract_plus_code("123 Main St"), None);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert!(contains_plus_code("7jvw+2h Mumbai"));
    }

    #[test]
    fn strip_removes_code_and_tidies_commas() {
        assert_eq!(
            strip_plus_code("7JVW+2H, Koregaon Park, Pune"),
            "Koregaon Park, Pune"
        );
        assert_eq!(strip_plus_code("7JVW+2H Mumbai"), "Mumbai");
    }

    #[test]
    fn bare_code_detection() {
        assert!(is_bare_plus_code("7JVW+2H"));
        assert!(is_bare_plus_code("7JVW+2H Mumbai, Maharashtra"));
        assert!(is_bare_plus_code("7JVW+2H, Pune, Maharashtra"));
        assert!(!is_bare_plus_code("12 MG Road, Pune"));
        // Code embedded after street text is not "bare".
        assert!(!is_bare_plus_code("Shop 4 7JVW+2H, Pune"));
    }
}
