//! Mailer adapters.
//!
//! - `ResendMailer` - delivers through the Resend HTTP API
//! - `LoggingMailer` - logs messages when no provider is configured

mod logging;
mod resend;

pub use logging::LoggingMailer;
pub use resend::{ResendConfig, ResendMailer};
