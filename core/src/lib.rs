//! # PhoneCheck Core
//!
//! Domain value objects and the phone number validation service.
//! The service is written against the [`NumberingPlan`] trait; concrete
//! numbering-plan metadata lives in the infrastructure crate.

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::value_objects::{
    FailureReason, FieldError, NormalizedPhoneNumber, PhoneValidationRequest,
    PhoneValidationResult, ValidationField,
};
pub use services::{NumberParseError, NumberingPlan, PhoneValidationService};
