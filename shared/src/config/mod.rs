//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod environment;
pub mod server;

use thiserror::Error;

pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Errors raised while loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
        })
    }
}
