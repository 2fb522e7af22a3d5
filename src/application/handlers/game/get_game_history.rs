//! GetGameHistoryHandler - Query handler for a game's moves in play order.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::{GameError, Move};
use crate::ports::GameRepository;

/// Query for a game's move history.
#[derive(Debug, Clone)]
pub struct GetGameHistoryQuery {
    pub game_id: GameId,
}

/// The moves of a game, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub game_id: GameId,
    pub moves: Vec<Move>,
}

impl GameHistory {
    /// Renders the history as `[(X, 0), (O, 4)]`.
    pub fn summary(&self) -> String {
        let moves: Vec<String> = self.moves.iter().map(ToString::to_string).collect();
        format!("[{}]", moves.join(", "))
    }
}

pub struct GetGameHistoryHandler {
    games: Arc<dyn GameRepository>,
}

impl GetGameHistoryHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(&self, query: GetGameHistoryQuery) -> Result<GameHistory, GameError> {
        let game = self
            .games
            .find_by_id(&query.game_id)
            .await?
            .ok_or(GameError::NotFound(query.game_id))?;

        Ok(GameHistory {
            game_id: query.game_id,
            moves: game.history().to_vec(),
        })
    }
}
