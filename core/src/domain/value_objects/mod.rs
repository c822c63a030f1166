//! Value objects representing immutable domain concepts.

pub mod phone_validation;

pub use phone_validation::{
    FailureReason, FieldError, NormalizedPhoneNumber, PhoneValidationRequest,
    PhoneValidationResult, ValidationField,
};
