//! Numbering plan backed by the `phonenumber` crate
//!
//! The bundled metadata database is loaded once, when the plan is created,
//! and is only read afterwards. One plan is shared by every server worker.

use std::panic;

use phonenumber::metadata::{Database, Metadata, DATABASE};
use phonenumber::{country, Mode, ParseError, PhoneNumber, Type};
use tracing::{debug, error};

use pv_core::{NumberParseError, NumberingPlan};
use pv_shared::phone::{contains_digit, has_plus_prefix, mask_phone_number};

use super::{area_code, region};

/// [`NumberingPlan`] implementation over libphonenumber metadata
pub struct PhoneNumberPlan {
    database: &'static Database,
}

impl PhoneNumberPlan {
    /// Create the plan, forcing the metadata database to load
    pub fn new() -> Self {
        let database: &'static Database = &DATABASE;
        debug!("Phone number metadata loaded");
        Self { database }
    }

    fn region_id(region: &str) -> Option<country::Id> {
        region.to_ascii_uppercase().parse::<country::Id>().ok()
    }

    fn region_metadata(&self, number: &PhoneNumber, national: &str) -> Option<&'static Metadata> {
        region::metadata_for_number(self.database, number.code().value(), national)
    }
}

impl Default for PhoneNumberPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberingPlan for PhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, raw: &str, default_region: Option<&str>) -> Result<PhoneNumber, NumberParseError> {
        if !contains_digit(raw) {
            return Err(NumberParseError::malformed("no digits in input"));
        }

        let country = match default_region {
            Some(region) => Some(Self::region_id(region).ok_or(NumberParseError::InvalidCountryCode)?),
            // Without a region only a `+` prefix can supply the calling code
            None if !has_plus_prefix(raw) => return Err(NumberParseError::InvalidCountryCode),
            None => None,
        };

        // The parser unwraps internally on some malformed inputs
        let owned = raw.to_string();
        match panic::catch_unwind(move || phonenumber::parse(country, owned)) {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(ParseError::InvalidCountryCode)) => Err(NumberParseError::InvalidCountryCode),
            Ok(Err(err)) => Err(NumberParseError::malformed(err.to_string())),
            Err(_) => {
                error!(
                    phone = %mask_phone_number(raw),
                    "phonenumber crate panicked while parsing phone number"
                );
                Err(NumberParseError::malformed("parser failure"))
            }
        }
    }

    fn format_e164(&self, number: &PhoneNumber) -> String {
        number.format().mode(Mode::E164).to_string()
    }

    fn region_code_for_number(&self, number: &PhoneNumber) -> String {
        let national = self.national_significant_number(number);
        self.region_metadata(number, &national)
            .map(|metadata| metadata.id().to_string())
            .unwrap_or_default()
    }

    fn calling_code_for_region(&self, region: &str) -> u16 {
        // Only real regions have a calling code; "001" and other ids do not
        Self::region_id(region)
            .and_then(|id| self.database.by_id::<str>(id.as_ref()))
            .map_or(0, |metadata| metadata.country_code())
    }

    fn geographical_area_code_length(&self, number: &PhoneNumber) -> usize {
        let national = self.national_significant_number(number);
        let metadata = match self.region_metadata(number, &national) {
            Some(metadata) if metadata.id() != region::NON_GEOGRAPHIC_REGION => metadata,
            _ => return 0,
        };

        // No national prefix and no leading zero: a closed dialling plan
        let calling_code = number.code().value();
        if metadata.national_prefix().is_none()
            && !national.starts_with('0')
            && !area_code::has_area_codes_without_national_prefix(calling_code)
        {
            return 0;
        }

        let number_type = region::number_type(metadata, &national);
        if !area_code::has_geographical_area_code(number_type, calling_code) {
            return 0;
        }

        let international = number.format().mode(Mode::International).to_string();
        area_code::national_destination_code_length(
            &international,
            calling_code,
            matches!(number_type, Type::Mobile),
        )
    }

    fn national_significant_number(&self, number: &PhoneNumber) -> String {
        let e164 = self.format_e164(number);
        let calling_code = number.code().value().to_string();

        e164.trim_start_matches('+')
            .strip_prefix(calling_code.as_str())
            .unwrap_or_default()
            .to_string()
    }
}
