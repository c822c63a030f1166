//! Route handlers
//!
//! - `phone_numbers` - Phone number validation (`GET /v1/phone-numbers`)

pub mod phone_numbers;

pub use phone_numbers::AppState;
