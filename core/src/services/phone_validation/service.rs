//! Main phone validation service implementation

use std::sync::Arc;

use crate::domain::value_objects::phone_validation::{
    FieldError, NormalizedPhoneNumber, PhoneValidationRequest, PhoneValidationResult,
    ValidationField,
};

use super::traits::{NumberParseError, NumberingPlan};

/// Phone validation service
///
/// Stateless apart from the shared, read-only numbering plan, so a single
/// instance can serve any number of concurrent requests.
pub struct PhoneValidationService<P: NumberingPlan> {
    plan: Arc<P>,
}

impl<P: NumberingPlan> PhoneValidationService<P> {
    /// Create a new validation service
    ///
    /// # Arguments
    ///
    /// * `plan` - Numbering plan used for parsing and metadata lookups
    pub fn new(plan: Arc<P>) -> Self {
        Self { plan }
    }

    /// Validate and normalize a phone number
    ///
    /// This method:
    /// 1. Rejects an empty phone number
    /// 2. Parses the number without a region, honouring only a `+` calling code
    /// 3. If that fails for lack of a calling code, checks the region hint
    /// 4. Re-parses with the hint as the default region
    /// 5. Formats as E.164 and splits the national number at the area code
    ///
    /// The first failure wins; exactly one field error is ever reported.
    pub fn validate(&self, request: &PhoneValidationRequest) -> PhoneValidationResult {
        let raw = request.raw_phone_number.as_str();

        let result = match self.parse(raw, &request.country_code_hint) {
            Ok(number) => PhoneValidationResult::Valid(self.normalize(&number)),
            Err(error) => PhoneValidationResult::Invalid(error),
        };

        if let PhoneValidationResult::Invalid(error) = &result {
            tracing::debug!(
                field = error.field.as_str(),
                reason = error.reason.as_str(),
                "Phone number rejected"
            );
        }

        result
    }

    fn parse(&self, raw: &str, hint: &str) -> Result<P::Number, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::missing(raw, ValidationField::PhoneNumber));
        }

        match self.plan.parse(raw, None) {
            Ok(number) => Ok(number),
            Err(NumberParseError::InvalidCountryCode) => self.parse_with_hint(raw, hint),
            Err(NumberParseError::Malformed { reason }) => {
                tracing::trace!(reason = %reason, "Unanchored parse failed");
                Err(FieldError::invalid(raw, ValidationField::PhoneNumber))
            }
        }
    }

    fn parse_with_hint(&self, raw: &str, hint: &str) -> Result<P::Number, FieldError> {
        if hint.is_empty() {
            return Err(FieldError::missing(raw, ValidationField::CountryCode));
        }

        if self.plan.calling_code_for_region(hint) == 0 {
            return Err(FieldError::invalid(raw, ValidationField::CountryCode));
        }

        self.plan.parse(raw, Some(hint)).map_err(|error| {
            tracing::trace!(error = %error, region = hint, "Region-hinted parse failed");
            FieldError::invalid(raw, ValidationField::PhoneNumber)
        })
    }

    fn normalize(&self, number: &P::Number) -> NormalizedPhoneNumber {
        let national = self.plan.national_significant_number(number);
        let area_code_length = self.plan.geographical_area_code_length(number);

        // is_char_boundary is false past the end, so an oversized length
        // leaves the whole number local
        let (area_code, local_phone_number) = if national.is_char_boundary(area_code_length) {
            national.split_at(area_code_length)
        } else {
            ("", national.as_str())
        };

        NormalizedPhoneNumber {
            phone_number: self.plan.format_e164(number),
            country_code: self.plan.region_code_for_number(number),
            area_code: area_code.to_string(),
            local_phone_number: local_phone_number.to_string(),
        }
    }
}
