//! DTOs for game endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{GameHistory, GameView};
use crate::domain::game::Move;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/games`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub player_x: String,
    pub player_o: String,
}

/// Body of `PUT /api/games/:key`.
#[derive(Debug, Clone, Deserialize)]
pub struct MakeMoveRequest {
    pub user_name: String,
    #[serde(rename = "move")]
    pub cell: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub key: String,
    pub board: Vec<String>,
    pub player_x: String,
    pub player_o: String,
    pub next_move: String,
    pub is_game_over: bool,
    pub winner: String,
}

impl From<GameView> for GameResponse {
    fn from(view: GameView) -> Self {
        Self {
            key: view.key,
            board: view.board,
            player_x: view.player_x,
            player_o: view.player_o,
            next_move: view.next_move,
            is_game_over: view.is_game_over,
            winner: view.winner,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameListResponse {
    pub items: Vec<GameResponse>,
}

impl From<Vec<GameView>> for GameListResponse {
    fn from(views: Vec<GameView>) -> Self {
        Self {
            items: views.into_iter().map(GameResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    pub symbol: String,
    pub cell: u8,
}

impl From<&Move> for MoveResponse {
    fn from(mv: &Move) -> Self {
        Self {
            symbol: mv.symbol.as_str().to_string(),
            cell: mv.cell,
        }
    }
}

/// Move history: a printable summary plus the structured moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub message: String,
    pub moves: Vec<MoveResponse>,
}

impl From<GameHistory> for HistoryResponse {
    fn from(history: GameHistory) -> Self {
        Self {
            message: history.summary(),
            moves: history.moves.iter().map(MoveResponse::from).collect(),
        }
    }
}
