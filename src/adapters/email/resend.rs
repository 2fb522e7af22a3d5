//! Resend Mailer - sends email through the Resend HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key, "Tic Tac Toe <noreply@example.com>")
//!     .with_base_url("https://api.resend.com");
//!
//! let mailer = ResendMailer::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::ports::{EmailMessage, Mailer, MailerError};

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Secret<String>,
    /// Sender, e.g. `"Tic Tac Toe <noreply@example.com>"`.
    pub from: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Builds from a key that is already wrapped.
    pub fn from_secret(api_key: Secret<String>, from: impl Into<String>) -> Self {
        Self {
            api_key,
            ..Self::new(String::new(), from)
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailerError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailerError> {
        let body = ResendRequest {
            from: &self.config.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailerError::Transport(format!("Request timed out: {}", e))
                } else {
                    MailerError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(to = %message.to, subject = %message.subject, "Email sent");
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(MailerError::Rejected {
            status: status.as_u16(),
            message: error_body,
        })
    }
}
