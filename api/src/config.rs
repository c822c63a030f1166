use pv_shared::config::LoggingConfig;

pub use pv_shared::config::{AppConfig as Config, ConfigError};

/// Load configuration from the process environment and an optional `.env` file
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

/// Initialize env_logger, letting `RUST_LOG` override the configured level
pub fn init_logging(logging: &LoggingConfig) {
    let env = env_logger::Env::new().default_filter_or(logging.level.as_str());
    if env_logger::try_init_from_env(env).is_err() {
        log::debug!("Logger already initialized");
    }
}
