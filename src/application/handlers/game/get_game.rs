//! GetGameHandler - Query handler for the current state of a game.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::GameError;
use crate::ports::{GameRepository, UserRepository};

use super::GameView;

/// Query for a single game.
#[derive(Debug, Clone)]
pub struct GetGameQuery {
    pub game_id: GameId,
}

pub struct GetGameHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
}

impl GetGameHandler {
    pub fn new(users: Arc<dyn UserRepository>, games: Arc<dyn GameRepository>) -> Self {
        Self { users, games }
    }

    pub async fn handle(&self, query: GetGameQuery) -> Result<GameView, GameError> {
        let game = self
            .games
            .find_by_id(&query.game_id)
            .await?
            .ok_or(GameError::NotFound(query.game_id))?;

        Ok(GameView::resolve(&game, self.users.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockStore;
    use crate::domain::game::Game;

    #[tokio::test]
    async fn returns_view_of_existing_game() {
        let store = Arc::new(MockStore::new());
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let mut game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        game.apply_move(alice.id(), 2).unwrap();
        let game_id = *game.id();
        store.seed_game(game);

        let handler = GetGameHandler::new(store.clone(), store.clone());
        let view = handler.handle(GetGameQuery { game_id }).await.unwrap();

        assert_eq!(view.key, game_id.to_string());
        assert_eq!(view.board[2], "X");
        assert_eq!(view.next_move, "bob");
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let store = Arc::new(MockStore::new());
        let handler = GetGameHandler::new(store.clone(), store);
        let game_id = GameId::new();

        let result = handler.handle(GetGameQuery { game_id }).await;

        assert_eq!(result, Err(GameError::NotFound(game_id)));
    }
}
