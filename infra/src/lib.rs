//! # Infrastructure Layer
//!
//! Concrete implementations of the core service traits. Currently this is
//! the numbering plan used by the phone validation service, backed by the
//! `phonenumber` crate and its bundled libphonenumber metadata.

/// Phone numbering-plan module
pub mod phone;

pub use phone::PhoneNumberPlan;
