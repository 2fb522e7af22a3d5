//! Service configuration, read from `TICTACTOE__*` environment variables.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! single-process setup: in-memory storage and cache, logged email.
//! A `.env` file in the working directory is read first when present.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_backend::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod email;
mod error;
mod jobs;
mod redis;
mod server;

pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use jobs::JobsConfig;
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// All configuration sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis configuration (aggregate cache)
    #[serde(default)]
    pub redis: RedisConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// Background job intervals
    #[serde(default)]
    pub jobs: JobsConfig,
}

impl AppConfig {
    /// Reads the environment. Sections are separated by `__`, so
    /// `TICTACTOE__JOBS__REMINDER_INTERVAL_SECS=600` sets
    /// `jobs.reminder_interval_secs`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TICTACTOE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.redis.validate()?;
        self.email.validate()?;
        self.jobs.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
