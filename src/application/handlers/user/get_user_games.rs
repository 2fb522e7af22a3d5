//! GetUserGamesHandler - a player's games still in progress.

use std::sync::Arc;

use crate::application::handlers::game::GameView;
use crate::domain::user::UserError;
use crate::ports::{GameRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct GetUserGamesQuery {
    pub user_name: String,
}

pub struct GetUserGamesHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
}

impl GetUserGamesHandler {
    pub fn new(users: Arc<dyn UserRepository>, games: Arc<dyn GameRepository>) -> Self {
        Self { users, games }
    }

    pub async fn handle(&self, query: GetUserGamesQuery) -> Result<Vec<GameView>, UserError> {
        let user = self
            .users
            .find_by_name(&query.user_name)
            .await?
            .ok_or_else(|| UserError::not_found(&query.user_name))?;

        let games = self.games.find_active_by_player(user.id()).await?;

        let mut views = Vec::with_capacity(games.len());
        for game in &games {
            views.push(GameView::resolve(game, self.users.as_ref()).await?);
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockStore;
    use crate::domain::foundation::GameId;
    use crate::domain::game::Game;

    #[tokio::test]
    async fn lists_active_games_from_either_seat() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let carol = store.seed_user("carol");
        store.seed_game(Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap());
        store.seed_game(Game::new(GameId::new(), *carol.id(), *alice.id()).unwrap());
        store.seed_game(Game::new(GameId::new(), *bob.id(), *carol.id()).unwrap());

        let handler = GetUserGamesHandler::new(store.clone(), store);
        let views = handler
            .handle(GetUserGamesQuery {
                user_name: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert!(views
            .iter()
            .all(|v| v.player_x == "alice" || v.player_o == "alice"));
    }

    #[tokio::test]
    async fn finished_games_are_excluded() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let mut game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        for (i, cell) in [0, 1, 4, 2, 8].into_iter().enumerate() {
            let actor = if i % 2 == 0 { alice.id() } else { bob.id() };
            game.apply_move(actor, cell).unwrap();
        }
        store.seed_game(game);

        let handler = GetUserGamesHandler::new(store.clone(), store);
        let views = handler
            .handle(GetUserGamesQuery {
                user_name: "alice".to_string(),
            })
            .await
            .unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = Arc::new(MockStore::new());
        let handler = GetUserGamesHandler::new(store.clone(), store);

        let result = handler
            .handle(GetUserGamesQuery {
                user_name: "ghost".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), UserError::NotFound("ghost".to_string()));
    }
}
