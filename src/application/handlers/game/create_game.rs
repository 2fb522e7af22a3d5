//! CreateGameHandler - Command handler for starting a new game.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::{GameRepository, UserRepository};

use super::GameView;

/// Command to start a game between two registered users.
#[derive(Debug, Clone)]
pub struct CreateGameCommand {
    pub player_x: String,
    pub player_o: String,
}

/// Handler for creating games.
pub struct CreateGameHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
}

impl CreateGameHandler {
    pub fn new(users: Arc<dyn UserRepository>, games: Arc<dyn GameRepository>) -> Self {
        Self { users, games }
    }

    pub async fn handle(&self, cmd: CreateGameCommand) -> Result<GameView, GameError> {
        // Both seats must resolve; a missing player is reported by name.
        let player_x = self
            .users
            .find_by_name(&cmd.player_x)
            .await?
            .ok_or_else(|| GameError::user_not_found(&cmd.player_x))?;
        let player_o = self
            .users
            .find_by_name(&cmd.player_o)
            .await?
            .ok_or_else(|| GameError::user_not_found(&cmd.player_o))?;

        let game = Game::new(GameId::new(), *player_x.id(), *player_o.id())?;
        self.games.save(&game).await?;

        tracing::info!(
            game_id = %game.id(),
            player_x = %player_x.name(),
            player_o = %player_o.name(),
            "Game created"
        );

        Ok(GameView::resolve(&game, self.users.as_ref()).await?)
    }
}
