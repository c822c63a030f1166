//! Phone validation request and result value objects.
//!
//! These types are built fresh for every request and never mutated afterwards.
//! Empty strings are plain values here; dropping them from the wire format is
//! the job of the API layer.

use std::fmt;

use thiserror::Error;

/// Raw input for a single validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneValidationRequest {
    /// Phone number exactly as received, not normalized before parsing
    pub raw_phone_number: String,

    /// Region code (e.g. "US") used only when the number has no `+` calling code
    pub country_code_hint: String,
}

impl PhoneValidationRequest {
    pub fn new(raw_phone_number: impl Into<String>, country_code_hint: impl Into<String>) -> Self {
        Self {
            raw_phone_number: raw_phone_number.into(),
            country_code_hint: country_code_hint.into(),
        }
    }
}

/// A successfully validated number in E.164 form with its geographic split
///
/// `area_code` followed by `local_phone_number` is exactly the national
/// significant number. `area_code` is empty for regions without geographical
/// area codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPhoneNumber {
    pub phone_number: String,
    pub country_code: String,
    pub area_code: String,
    pub local_phone_number: String,
}

impl NormalizedPhoneNumber {
    /// The national significant number this record was split from
    pub fn national_significant_number(&self) -> String {
        format!("{}{}", self.area_code, self.local_phone_number)
    }
}

/// Input field a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    PhoneNumber,
    CountryCode,
}

impl ValidationField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::PhoneNumber => "phoneNumber",
            ValidationField::CountryCode => "countryCode",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    Missing,
    Invalid,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::Missing => "required value is missing",
            FailureReason::Invalid => "invalid value",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    /// The raw phone number as it was received
    pub original_input: String,
    pub field: ValidationField,
    pub reason: FailureReason,
}

impl FieldError {
    pub fn new(original_input: impl Into<String>, field: ValidationField, reason: FailureReason) -> Self {
        Self {
            original_input: original_input.into(),
            field,
            reason,
        }
    }

    pub fn missing(original_input: impl Into<String>, field: ValidationField) -> Self {
        Self::new(original_input, field, FailureReason::Missing)
    }

    pub fn invalid(original_input: impl Into<String>, field: ValidationField) -> Self {
        Self::new(original_input, field, FailureReason::Invalid)
    }
}

/// Outcome of validating one phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidationResult {
    Valid(NormalizedPhoneNumber),
    Invalid(FieldError),
}

impl PhoneValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneValidationResult::Valid(_))
    }
}

impl From<NormalizedPhoneNumber> for PhoneValidationResult {
    fn from(number: NormalizedPhoneNumber) -> Self {
        PhoneValidationResult::Valid(number)
    }
}

impl From<FieldError> for PhoneValidationResult {
    fn from(error: FieldError) -> Self {
        PhoneValidationResult::Invalid(error)
    }
}
