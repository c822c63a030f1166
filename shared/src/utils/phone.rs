//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// First significant character is a plus sign (ASCII or full-width), anything
// before it being neither a plus nor a digit.
static LEADING_PLUS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^+＋\p{Nd}]*[+＋]").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check whether a raw number carries an explicit `+` calling-code prefix
pub fn has_plus_prefix(phone: &str) -> bool {
    LEADING_PLUS_REGEX.is_match(phone)
}

/// Check whether a raw number contains at least one digit
pub fn contains_digit(phone: &str) -> bool {
    phone.chars().any(|c| c.is_numeric())
}

/// Mask a phone number for logging (e.g., +16****0000)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
