//! Business services containing domain logic and use cases.

pub mod phone_validation;

// Re-export commonly used types
pub use phone_validation::{NumberParseError, NumberingPlan, PhoneValidationService};
