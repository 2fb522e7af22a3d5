//! JobScheduler - Background service for periodic jobs.
//!
//! Runs two jobs on fixed intervals:
//!
//! | Job | Default | Description |
//! |-----|---------|-------------|
//! | reminders | 4h | Email players who have games in progress |
//! | average refresh | 60s | Recompute the cached average-moves announcement |
//!
//! ## Graceful Shutdown
//!
//! The scheduler listens on a watch channel and returns once `true` is
//! sent. A job that is already running finishes first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::application::handlers::{RefreshAverageMovesHandler, SendRemindersHandler};

/// Configuration for the JobScheduler.
#[derive(Debug, Clone)]
pub struct JobSchedulerConfig {
    pub reminder_interval: Duration,
    pub average_refresh_interval: Duration,
}

impl Default for JobSchedulerConfig {
    fn default() -> Self {
        Self {
            reminder_interval: Duration::from_secs(4 * 60 * 60),
            average_refresh_interval: Duration::from_secs(60),
        }
    }
}

impl JobSchedulerConfig {
    pub fn with_reminder_interval(mut self, interval: Duration) -> Self {
        self.reminder_interval = interval;
        self
    }

    pub fn with_average_refresh_interval(mut self, interval: Duration) -> Self {
        self.average_refresh_interval = interval;
        self
    }
}

pub struct JobScheduler {
    reminders: Arc<SendRemindersHandler>,
    average: Arc<RefreshAverageMovesHandler>,
    config: JobSchedulerConfig,
}

impl JobScheduler {
    pub fn new(
        reminders: Arc<SendRemindersHandler>,
        average: Arc<RefreshAverageMovesHandler>,
        config: JobSchedulerConfig,
    ) -> Self {
        Self {
            reminders,
            average,
            config,
        }
    }

    /// Run both jobs until the shutdown signal is received.
    ///
    /// The average is refreshed immediately on start; the first reminder
    /// goes out one full interval later.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut average_tick = time::interval(self.config.average_refresh_interval);
        average_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let reminder_period = self.config.reminder_interval;
        let mut reminder_tick = time::interval_at(Instant::now() + reminder_period, reminder_period);
        reminder_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            reminder_interval_secs = reminder_period.as_secs(),
            average_refresh_interval_secs = self.config.average_refresh_interval.as_secs(),
            "Job scheduler started"
        );

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    // A dropped sender also means stop.
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Job scheduler stopped");
                        return;
                    }
                }

                _ = average_tick.tick() => {
                    self.refresh_average_once().await;
                }

                _ = reminder_tick.tick() => {
                    self.send_reminders_once().await;
                }
            }
        }
    }

    /// Run one reminder pass, logging any failure.
    pub async fn send_reminders_once(&self) {
        if let Err(e) = self.reminders.handle().await {
            tracing::error!(error = %e, "Reminder job failed");
        }
    }

    /// Run one average refresh, logging any failure.
    pub async fn refresh_average_once(&self) {
        if let Err(e) = self.average.handle().await {
            tracing::error!(error = %e, "Average moves refresh failed");
        }
    }
}
