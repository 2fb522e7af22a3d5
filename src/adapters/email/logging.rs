//! Logging mailer for development and tests.
//!
//! Writes each message to the log instead of delivering it and keeps the
//! most recent ones for inspection.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{EmailMessage, Mailer, MailerError};

const DEFAULT_CAPACITY: usize = 100;

/// Mailer that logs instead of sending. Clones share the outbox.
#[derive(Clone)]
pub struct LoggingMailer {
    outbox: Arc<Mutex<VecDeque<EmailMessage>>>,
    capacity: usize,
}

impl LoggingMailer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outbox: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Messages "sent" so far, oldest first.
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.outbox.lock().await.iter().cloned().collect()
    }
}

impl Default for LoggingMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailerError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "Email (not delivered)"
        );

        let mut outbox = self.outbox.lock().await;
        if outbox.len() == self.capacity {
            outbox.pop_front();
        }
        outbox.push_back(message);
        Ok(())
    }
}
