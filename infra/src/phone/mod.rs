//! Phone Numbering Plan Module
//!
//! Implements [`pv_core::NumberingPlan`] on top of the `phonenumber` crate:
//! - Parsing with and without a default region
//! - E.164 formatting and region lookup, keeping Italian leading zeros
//! - Geographical area code length, following libphonenumber's rules

pub mod area_code;
pub mod numbering_plan;
pub mod region;

pub use numbering_plan::PhoneNumberPlan;
