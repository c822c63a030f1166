//! Geographical area code rules
//!
//! The numbering-plan metadata has no explicit "area code" field. Like
//! libphonenumber, the area code is taken to be the national destination code
//! (the first digit group after the calling code in international format),
//! but only for number types that are tied to a location.

use once_cell::sync::Lazy;
use phonenumber::Type;
use regex::Regex;

static DIGIT_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Calling codes whose mobile numbers are geographically assigned
const GEO_MOBILE_COUNTRIES: &[u16] = &[
    52, // Mexico
    54, // Argentina
    55, // Brazil
    62, // Indonesia: some prefixes only (fixed CDMA wireless)
    86, // China
];

/// Geo-mobile countries where mobile numbers nevertheless carry no area code
const GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES: &[u16] = &[86];

/// Calling codes with area codes despite having no national prefix
const AREA_CODES_WITHOUT_NATIONAL_PREFIX: &[u16] = &[
    52, // Mexico
];

/// Token inserted between calling code and area code when dialling mobiles
/// internationally
fn mobile_token(calling_code: u16) -> Option<&'static str> {
    match calling_code {
        54 => Some("9"),
        _ => None,
    }
}

/// Whether the country keeps area codes even though its plan has no national prefix
pub fn has_area_codes_without_national_prefix(calling_code: u16) -> bool {
    AREA_CODES_WITHOUT_NATIONAL_PREFIX.contains(&calling_code)
}

/// Whether a number of this type in this country has a geographical area code
pub fn has_geographical_area_code(number_type: Type, calling_code: u16) -> bool {
    match number_type {
        Type::FixedLine | Type::FixedLineOrMobile => true,
        Type::Mobile => {
            GEO_MOBILE_COUNTRIES.contains(&calling_code)
                && !GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES.contains(&calling_code)
        }
        _ => false,
    }
}

/// Length of the national destination code of an internationally formatted
/// number such as `+1 650-253-0000`
///
/// Returns 0 when the number has no group between the calling code and the
/// subscriber number.
pub fn national_destination_code_length(international: &str, calling_code: u16, is_mobile: bool) -> usize {
    let groups: Vec<&str> = DIGIT_GROUPS
        .find_iter(international)
        .map(|m| m.as_str())
        .collect();

    // groups[0] is the calling code; the last group is never an area code
    if groups.len() <= 2 {
        return 0;
    }

    if is_mobile && mobile_token(calling_code).is_some() {
        return groups[1].len() + groups[2].len();
    }

    groups[1].len()
}
