//! Redis configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Redis configuration.
///
/// Without a URL the aggregate cache lives in process memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: Option<String>,

    /// Key namespace for cached values
    pub key_prefix: Option<String>,
}

impl RedisConfig {
    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.url {
            Some(url) if !url.starts_with("redis://") && !url.starts_with("rediss://") => {
                Err(ValidationError::InvalidRedisUrl)
            }
            _ => Ok(()),
        }
    }
}
