//! Region resolution and number typing
//!
//! `phonenumber` looks regions up by the national number with its leading
//! zeros stripped, which misplaces Italian-style numbers (`+39 06 ...`). These
//! helpers work on the national significant number as written, zeros included.

use phonenumber::metadata::{Database, Descriptor, Metadata};
use phonenumber::Type;

/// Region id used by libphonenumber for non-geographic calling codes (+800, +979, ...)
pub const NON_GEOGRAPHIC_REGION: &str = "001";

/// Metadata of the region a number belongs to
///
/// A calling code shared by several regions is resolved by each candidate's
/// leading digits, or failing that by which region's number patterns the
/// national number fits. Non-geographic calling codes resolve to their own
/// `001` entry.
pub fn metadata_for_number<'d>(database: &'d Database, calling_code: u16, national: &str) -> Option<&'d Metadata> {
    let regions = database.region(&calling_code)?;

    if let [region] = regions.as_slice() {
        if *region == NON_GEOGRAPHIC_REGION {
            return database.by_code(&calling_code)?.into_iter().next();
        }
        return database.by_id(*region);
    }

    regions
        .into_iter()
        .filter_map(|region| database.by_id(region))
        .find(|metadata| match metadata.leading_digits() {
            Some(leading) => leading.find(national).map_or(false, |m| m.start() == 0),
            None => number_type(metadata, national) != Type::Unknown,
        })
}

fn matches(descriptor: Option<&Descriptor>, national: &str) -> bool {
    descriptor.map_or(false, |descriptor| descriptor.is_match(national))
}

/// Classify a national significant number against one region's patterns
pub fn number_type(metadata: &Metadata, national: &str) -> Type {
    let descriptors = metadata.descriptors();
    if !descriptors.general().is_match(national) {
        return Type::Unknown;
    }

    let special = [
        (descriptors.premium_rate(), Type::PremiumRate),
        (descriptors.toll_free(), Type::TollFree),
        (descriptors.shared_cost(), Type::SharedCost),
        (descriptors.voip(), Type::Voip),
        (descriptors.personal_number(), Type::PersonalNumber),
        (descriptors.pager(), Type::Pager),
        (descriptors.uan(), Type::Uan),
        (descriptors.voicemail(), Type::Voicemail),
    ];
    if let Some((_, kind)) = special.into_iter().find(|(descriptor, _)| matches(*descriptor, national)) {
        return kind;
    }

    let fixed_line = descriptors.fixed_line();
    let mobile = descriptors.mobile();
    let same_patterns = match (fixed_line, mobile) {
        (Some(fixed_line), Some(mobile)) => {
            fixed_line.national_number().as_str() == mobile.national_number().as_str()
        }
        _ => false,
    };

    if matches(fixed_line, national) {
        if same_patterns || matches(mobile, national) {
            return Type::FixedLineOrMobile;
        }
        return Type::FixedLine;
    }

    if !same_patterns && matches(mobile, national) {
        return Type::Mobile;
    }

    Type::Unknown
}
