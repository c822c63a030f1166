//! Trait for numbering-plan metadata integration

use thiserror::Error;

/// Why a raw string could not be parsed into a phone number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    /// The number carries no resolvable country calling code and no usable
    /// default region was supplied
    #[error("Invalid country code")]
    InvalidCountryCode,

    /// Any other structural problem: no digits, too short, too long, ...
    #[error("Malformed phone number: {reason}")]
    Malformed { reason: String },
}

impl NumberParseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        NumberParseError::Malformed {
            reason: reason.into(),
        }
    }
}

/// Trait for phone number parsing and numbering-plan lookups
///
/// Implementations read immutable metadata only and are shared across all
/// server workers.
pub trait NumberingPlan: Send + Sync {
    /// Parsed phone number representation
    type Number;

    /// Parse a raw string, using `default_region` when it has no `+` calling code
    fn parse(&self, raw: &str, default_region: Option<&str>) -> Result<Self::Number, NumberParseError>;

    /// Format as E.164: `+`, calling code and digits, no separators
    fn format_e164(&self, number: &Self::Number) -> String;

    /// Region code the number belongs to (`001` for non-geographic numbers),
    /// empty if no region matches
    fn region_code_for_number(&self, number: &Self::Number) -> String;

    /// Calling code for a region code, 0 if the region is unknown
    fn calling_code_for_region(&self, region: &str) -> u16;

    /// Length of the geographical area code, 0 if there is none
    fn geographical_area_code_length(&self, number: &Self::Number) -> usize;

    /// Digits of the number without the calling code
    fn national_significant_number(&self, number: &Self::Number) -> String;
}
