//! Server configuration module

use std::env;

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    pub workers: usize,

    /// Keep-alive timeout in seconds
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0, // Use all CPU cores
            keep_alive: 75,
        }
    }
}

impl ServerConfig {
    /// Load from `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` and `SERVER_KEEP_ALIVE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var("SERVER_PORT", defaults.port)?,
            workers: parse_var("SERVER_WORKERS", defaults.workers)?,
            keep_alive: parse_var("SERVER_KEEP_ALIVE", defaults.keep_alive)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(default),
    }
}
