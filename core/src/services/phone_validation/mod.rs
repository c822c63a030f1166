//! Phone number validation service module
//!
//! This module turns an unstructured phone number plus an optional region hint
//! into either a normalized E.164 number with its area code split, or a single
//! field-level error:
//! - Presence checks on the phone number and the region hint
//! - Unanchored parsing with a region-hinted retry
//! - E.164 formatting and area code / local number decomposition

mod service;
mod traits;


pub use service::PhoneValidationService;
pub use traits::{NumberParseError, NumberingPlan};
