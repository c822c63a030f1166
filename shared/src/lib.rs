//! Shared utilities and common types for the PhoneCheck server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (phone prefix detection, masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, LoggingConfig, ServerConfig};
pub use utils::phone;
