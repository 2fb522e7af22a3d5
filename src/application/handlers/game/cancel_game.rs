//! CancelGameHandler - Command handler for deleting a finished game.
//!
//! Only games that are over may be removed. A game still being played is
//! left untouched.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::GameError;
use crate::ports::GameRepository;

/// Command to delete a game.
#[derive(Debug, Clone)]
pub struct CancelGameCommand {
    pub game_id: GameId,
}

/// Result of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelGameResult {
    pub game_id: GameId,
}

impl CancelGameResult {
    pub fn message(&self) -> String {
        format!("Game with key : {} deleted!", self.game_id)
    }
}

pub struct CancelGameHandler {
    games: Arc<dyn GameRepository>,
}

impl CancelGameHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(&self, cmd: CancelGameCommand) -> Result<CancelGameResult, GameError> {
        let game = self
            .games
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or(GameError::NotFound(cmd.game_id))?;

        game.ensure_finished()?;
        self.games.delete(game.id()).await?;

        tracing::info!(game_id = %game.id(), status = %game.status(), "Game deleted");

        Ok(CancelGameResult {
            game_id: cmd.game_id,
        })
    }
}
