//! Fallback and error handlers shared by all routes

pub mod error;

pub use error::{internal_error, method_not_allowed, not_found};
