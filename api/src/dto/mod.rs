//! Request and response data transfer objects

pub mod phone_number;

pub use phone_number::{PhoneNumberQuery, PhoneNumberResponse};
