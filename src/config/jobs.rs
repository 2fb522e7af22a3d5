//! Background job configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Intervals for the periodic jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    /// Seconds between reminder sweeps
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval_secs: u64,

    /// Seconds between average-moves refreshes
    #[serde(default = "default_average_refresh_interval")]
    pub average_refresh_interval_secs: u64,

    /// Run the jobs in this process
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl JobsConfig {
    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs)
    }

    pub fn average_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.average_refresh_interval_secs)
    }

    /// Validate job configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reminder_interval_secs == 0 {
            return Err(ValidationError::InvalidJobInterval("reminder_interval_secs"));
        }
        if self.average_refresh_interval_secs == 0 {
            return Err(ValidationError::InvalidJobInterval(
                "average_refresh_interval_secs",
            ));
        }
        Ok(())
    }
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            reminder_interval_secs: default_reminder_interval(),
            average_refresh_interval_secs: default_average_refresh_interval(),
            enabled: default_enabled(),
        }
    }
}

fn default_reminder_interval() -> u64 {
    4 * 60 * 60
}

fn default_average_refresh_interval() -> u64 {
    60
}

fn default_enabled() -> bool {
    true
}
