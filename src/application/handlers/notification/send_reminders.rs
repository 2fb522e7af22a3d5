//! SendRemindersHandler - periodic nudge for players with unfinished games.

use std::sync::Arc;

use crate::ports::{EmailMessage, GameRepository, Mailer, UserRepository};

use super::NotificationError;

pub const REMINDER_SUBJECT: &str = "This is a reminder!";

/// Counts from one reminder run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderSummary {
    pub sent: usize,
    pub failed: usize,
}

pub struct SendRemindersHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
    mailer: Arc<dyn Mailer>,
}

impl SendRemindersHandler {
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

    /// Mails every user with an email and at least one game in progress.
    ///
    /// A failed delivery is logged and the run carries on with the next
    /// user. Only repository failures abort the run.
    pub async fn handle(&self) -> Result<ReminderSummary, NotificationError> {
        let mut summary = ReminderSummary::default();

        for user in self.users.find_with_email().await? {
            let games = self.games.find_active_by_player(user.id()).await?;
            if games.is_empty() {
                continue;
            }

            let keys: Vec<String> = games.iter().map(|g| g.id().to_string()).collect();
            let body = format!(
                "Hello {}, you have {} games in progress. Their keys are: {}",
                user.name(),
                games.len(),
                keys.join(", ")
            );
            tracing::debug!(to = %user.email(), "{}", body);

            match self
                .mailer
                .send(EmailMessage::new(user.email(), REMINDER_SUBJECT, body))
                .await
            {
                Ok(()) => summary.sent += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(user = %user.name(), error = %e, "Reminder email failed");
                }
            }
        }

        tracing::info!(sent = summary.sent, failed = summary.failed, "Reminders sent");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{MockMailer, MockStore};
    use crate::domain::foundation::GameId;
    use crate::domain::game::Game;

    #[tokio::test]
    async fn reminds_only_players_with_active_games() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        store.seed_user("carol");
        let first = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        let second = Game::new(GameId::new(), *bob.id(), *alice.id()).unwrap();
        let keys = format!("{}, {}", first.id(), second.id());
        store.seed_game(first);
        store.seed_game(second);

        let mailer = Arc::new(MockMailer::new());
        let handler = SendRemindersHandler::new(store.clone(), store, mailer.clone());

        let summary = handler.handle().await.unwrap();

        assert_eq!(summary, ReminderSummary { sent: 2, failed: 0 });
        let mail = mailer.sent();
        assert!(mail.iter().all(|m| m.subject == REMINDER_SUBJECT));
        assert!(mail.iter().all(|m| m.to != "carol@example.com"));
        let to_alice = mail.iter().find(|m| m.to == "alice@example.com").unwrap();
        assert_eq!(
            to_alice.body,
            format!("Hello alice, you have 2 games in progress. Their keys are: {}", keys)
        );
    }

    #[tokio::test]
    async fn finished_games_do_not_trigger_reminders() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let mut game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        for (i, cell) in [0, 1, 4, 2, 8].into_iter().enumerate() {
            let actor = if i % 2 == 0 { alice.id() } else { bob.id() };
            game.apply_move(actor, cell).unwrap();
        }
        store.seed_game(game);

        let mailer = Arc::new(MockMailer::new());
        let handler = SendRemindersHandler::new(store.clone(), store, mailer.clone());

        assert_eq!(handler.handle().await.unwrap(), ReminderSummary::default());
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn delivery_failures_are_counted_not_fatal() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        store.seed_game(Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap());

        let handler =
            SendRemindersHandler::new(store.clone(), store, Arc::new(MockMailer::failing()));

        assert_eq!(
            handler.handle().await.unwrap(),
            ReminderSummary { sent: 0, failed: 2 }
        );
    }
}
