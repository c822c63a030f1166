use std::collections::BTreeMap;

use serde::Serialize;

use pv_core::{FieldError, NormalizedPhoneNumber, PhoneValidationResult};

/// Query parameters for `GET /v1/phone-numbers`
///
/// Absent parameters are empty strings and unknown ones are ignored. When a
/// parameter repeats, its first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberQuery {
    pub phone_number: String,
    pub country_code: String,
}

impl PhoneNumberQuery {
    pub const PHONE_NUMBER: &'static str = "phoneNumber";
    pub const COUNTRY_CODE: &'static str = "countryCode";
}

impl From<Vec<(String, String)>> for PhoneNumberQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            phone_number: first(Self::PHONE_NUMBER),
            country_code: first(Self::COUNTRY_CODE),
        }
    }
}

/// JSON body for both outcomes of a validation
///
/// Empty strings are left out of the body entirely, never sent as `""`.
///
/// ```json
/// {"phoneNumber":"+16502530000","countryCode":"US","areaCode":"650","localPhoneNumber":"2530000"}
/// {"phoneNumber":"650-253-0000","error":{"countryCode":"required value is missing"}}
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub area_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_phone_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BTreeMap<&'static str, &'static str>>,
}

impl From<NormalizedPhoneNumber> for PhoneNumberResponse {
    fn from(number: NormalizedPhoneNumber) -> Self {
        Self {
            phone_number: number.phone_number,
            country_code: number.country_code,
            area_code: number.area_code,
            local_phone_number: number.local_phone_number,
            error: None,
        }
    }
}

impl From<FieldError> for PhoneNumberResponse {
    fn from(error: FieldError) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(error.field.as_str(), error.reason.as_str());

        Self {
            phone_number: error.original_input,
            error: Some(fields),
            ..Default::default()
        }
    }
}

impl From<PhoneValidationResult> for PhoneNumberResponse {
    fn from(result: PhoneValidationResult) -> Self {
        match result {
            PhoneValidationResult::Valid(number) => number.into(),
            PhoneValidationResult::Invalid(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_core::ValidationField;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_query_from_pairs() {
        let query = PhoneNumberQuery::from(pairs(&[
            ("countryCode", "US"),
            ("unused", "x"),
            ("phoneNumber", "650-253-0000"),
        ]));

        assert_eq!(query.phone_number, "650-253-0000");
        assert_eq!(query.country_code, "US");
    }

    #[test]
    fn test_query_keeps_first_repeated_value() {
        let query = PhoneNumberQuery::from(pairs(&[
            ("phoneNumber", "+12125690123"),
            ("phoneNumber", "+525558910066"),
            ("countryCode", ""),
            ("countryCode", "MX"),
        ]));

        assert_eq!(query.phone_number, "+12125690123");
        assert_eq!(query.country_code, "");
    }

    #[test]
    fn test_query_missing_parameters_are_empty() {
        assert_eq!(PhoneNumberQuery::from(Vec::new()), PhoneNumberQuery::default());
        // Keys are case sensitive
        assert_eq!(
            PhoneNumberQuery::from(pairs(&[("phonenumber", "+12125690123")])),
            PhoneNumberQuery::default()
        );
    }

    #[test]
    fn test_success_body_field_order() {
        let response = PhoneNumberResponse::from(NormalizedPhoneNumber {
            phone_number: "+16502530000".to_string(),
            country_code: "US".to_string(),
            area_code: "650".to_string(),
            local_phone_number: "2530000".to_string(),
        });

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"phoneNumber":"+16502530000","countryCode":"US","areaCode":"650","localPhoneNumber":"2530000"}"#
        );
    }

    #[test]
    fn test_empty_area_code_is_omitted() {
        let response = PhoneNumberResponse::from(NormalizedPhoneNumber {
            phone_number: "+80012345678".to_string(),
            country_code: "001".to_string(),
            area_code: String::new(),
            local_phone_number: "12345678".to_string(),
        });

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"phoneNumber":"+80012345678","countryCode":"001","localPhoneNumber":"12345678"}"#
        );
    }

    #[test]
    fn test_error_body() {
        let response = PhoneNumberResponse::from(FieldError::missing(
            "650-253-0000",
            ValidationField::CountryCode,
        ));

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"phoneNumber":"650-253-0000","error":{"countryCode":"required value is missing"}}"#
        );
    }

    #[test]
    fn test_error_body_without_input() {
        let response = PhoneNumberResponse::from(FieldError::missing("", ValidationField::PhoneNumber));

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"error":{"phoneNumber":"required value is missing"}}"#
        );
    }
}
