//! GetUserScoresHandler - every recorded match a player took part in.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::score::Score;
use crate::domain::user::UserError;
use crate::ports::{ScoreRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct GetUserScoresQuery {
    pub user_name: String,
}

/// A score with both players named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub winner: String,
    pub loser: String,
}

pub struct GetUserScoresHandler {
    users: Arc<dyn UserRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl GetUserScoresHandler {
    pub fn new(users: Arc<dyn UserRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self { users, scores }
    }

    pub async fn handle(&self, query: GetUserScoresQuery) -> Result<Vec<ScoreView>, UserError> {
        let user = self
            .users
            .find_by_name(&query.user_name)
            .await?
            .ok_or_else(|| UserError::not_found(&query.user_name))?;

        let scores = self.scores.find_by_user(user.id()).await?;

        // Opponents repeat across scores; look each one up once.
        let mut names: HashMap<UserId, String> = HashMap::new();
        names.insert(*user.id(), user.name().to_string());

        let mut views = Vec::with_capacity(scores.len());
        for score in &scores {
            views.push(self.view(score, &mut names).await?);
        }
        Ok(views)
    }

    async fn view(
        &self,
        score: &Score,
        names: &mut HashMap<UserId, String>,
    ) -> Result<ScoreView, UserError> {
        let winner = self.name_of(score.winner(), names).await?;
        let loser = self.name_of(score.loser(), names).await?;
        Ok(ScoreView {
            date: score.date().to_string(),
            winner,
            loser,
        })
    }

    async fn name_of(
        &self,
        id: &UserId,
        names: &mut HashMap<UserId, String>,
    ) -> Result<String, UserError> {
        if let Some(name) = names.get(id) {
            return Ok(name.clone());
        }
        let name = self
            .users
            .find_by_id(id)
            .await?
            .map(|u| u.name().to_string())
            .ok_or_else(|| UserError::not_found(id.to_string()))?;
        names.insert(*id, name.clone());
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockStore;
    use crate::domain::foundation::GameId;
    use crate::domain::game::Game;
    use crate::domain::user::User;
    use crate::ports::MatchRecorder as _;

    async fn record(store: &MockStore, winner: &User, loser: &User) {
        let mut game = Game::new(GameId::new(), *winner.id(), *loser.id()).unwrap();
        for (i, cell) in [0, 1, 4, 2].into_iter().enumerate() {
            let actor = if i % 2 == 0 { winner.id() } else { loser.id() };
            game.apply_move(actor, cell).unwrap();
        }
        store.seed_game(game.clone());
        game.apply_move(winner.id(), 8).unwrap();
        let score = Score::new(*game.id(), *winner.id(), *loser.id());
        store.record_win(&game, &score).await.unwrap();
    }

    #[tokio::test]
    async fn lists_wins_and_losses_with_names() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let carol = store.seed_user("carol");
        record(&store, &alice, &bob).await;
        record(&store, &bob, &alice).await;
        record(&store, &bob, &carol).await;

        let handler = GetUserScoresHandler::new(store.clone(), store);
        let scores = handler
            .handle(GetUserScoresQuery {
                user_name: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(scores.len(), 2);
        assert!(scores.iter().any(|s| s.winner == "alice" && s.loser == "bob"));
        assert!(scores.iter().any(|s| s.winner == "bob" && s.loser == "alice"));
        assert_eq!(scores[0].date.len(), 10);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = Arc::new(MockStore::new());
        let handler = GetUserScoresHandler::new(store.clone(), store);

        let result = handler
            .handle(GetUserScoresQuery {
                user_name: "ghost".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), UserError::NotFound("ghost".to_string()));
    }
}
