//! Email notification handlers.
//!
//! - `SendTurnEmailHandler` runs for each `Task::SendTurnEmail`
//! - `SendRemindersHandler` runs on the reminder schedule

mod send_reminders;
mod send_turn_email;

pub use send_reminders::{ReminderSummary, SendRemindersHandler};
pub use send_turn_email::{SendTurnEmailCommand, SendTurnEmailHandler};

use crate::domain::foundation::{DomainError, GameId, UserId};
use crate::ports::MailerError;

/// Errors raised while sending notifications.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Mailer error: {0}")]
    Mailer(#[from] MailerError),

    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}
