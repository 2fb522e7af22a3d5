//! SendTurnEmailHandler - tells the player to move that it is their turn.
//!
//! The recipient is read from the game when the task runs, not from the
//! task itself, so a stale task never mails the wrong player.

use std::sync::Arc;

use crate::domain::foundation::{GameId, UserId};
use crate::ports::{EmailMessage, GameRepository, Mailer, UserRepository};

use super::NotificationError;

pub const TURN_EMAIL_SUBJECT: &str = "It's your turn in Tic Tac Toe!";

#[derive(Debug, Clone)]
pub struct SendTurnEmailCommand {
    /// The player the task was scheduled for.
    pub user_id: UserId,
    pub game_id: GameId,
}

pub struct SendTurnEmailHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
    mailer: Arc<dyn Mailer>,
}

impl SendTurnEmailHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        games: Arc<dyn GameRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            users,
            games,
            mailer,
        }
    }

    /// Returns `false` when the game ended before the task ran.
    pub async fn handle(&self, cmd: SendTurnEmailCommand) -> Result<bool, NotificationError> {
        let game = self
            .games
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or(NotificationError::GameNotFound(cmd.game_id))?;

        if game.is_over() {
            tracing::debug!(game_id = %cmd.game_id, "Game over, turn email skipped");
            return Ok(false);
        }

        let recipient_id = *game.next_to_move();
        if recipient_id != cmd.user_id {
            tracing::debug!(
                game_id = %cmd.game_id,
                scheduled_for = %cmd.user_id,
                "Turn moved on since scheduling"
            );
        }

        let user = self
            .users
            .find_by_id(&recipient_id)
            .await?
            .ok_or(NotificationError::UserNotFound(recipient_id))?;

        let body = format!(
            "{}, It's your turn to play Tic Tac Toe. The game key is: {}",
            user.name(),
            game.id()
        );
        tracing::debug!(game_id = %game.id(), to = %user.email(), "{}", body);

        self.mailer
            .send(EmailMessage::new(user.email(), TURN_EMAIL_SUBJECT, body))
            .await?;
        Ok(true)
    }
}
