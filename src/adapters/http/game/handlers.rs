//! HTTP handlers for game endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ErrorResponse, MessageResponse};
use crate::application::handlers::{
    CancelGameCommand, CancelGameHandler, CreateGameCommand, CreateGameHandler,
    GetAverageMovesHandler, GetGameHandler, GetGameHistoryHandler, GetGameHistoryQuery,
    GetGameQuery, MakeMoveCommand, MakeMoveHandler,
};
use crate::domain::foundation::{ErrorCode, GameId};
use crate::domain::game::GameError;

use super::dto::{CreateGameRequest, GameResponse, HistoryResponse, MakeMoveRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GameHandlers {
    create_handler: Arc<CreateGameHandler>,
    get_handler: Arc<GetGameHandler>,
    make_move_handler: Arc<MakeMoveHandler>,
    cancel_handler: Arc<CancelGameHandler>,
    history_handler: Arc<GetGameHistoryHandler>,
    average_handler: Arc<GetAverageMovesHandler>,
}

impl GameHandlers {
    pub fn new(
        create_handler: Arc<CreateGameHandler>,
        get_handler: Arc<GetGameHandler>,
        make_move_handler: Arc<MakeMoveHandler>,
        cancel_handler: Arc<CancelGameHandler>,
        history_handler: Arc<GetGameHistoryHandler>,
        average_handler: Arc<GetAverageMovesHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            make_move_handler,
            cancel_handler,
            history_handler,
            average_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/games - Start a game between two users
pub async fn create_game(
    State(handlers): State<GameHandlers>,
    Json(req): Json<CreateGameRequest>,
) -> Response {
    let cmd = CreateGameCommand {
        player_x: req.player_x,
        player_o: req.player_o,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(GameResponse::from(view))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// GET /api/games/:key - Current game state
pub async fn get_game(State(handlers): State<GameHandlers>, Path(key): Path<String>) -> Response {
    let game_id = match parse_key(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetGameQuery { game_id }).await {
        Ok(view) => (StatusCode::OK, Json(GameResponse::from(view))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// PUT /api/games/:key - Play a move
pub async fn make_move(
    State(handlers): State<GameHandlers>,
    Path(key): Path<String>,
    Json(req): Json<MakeMoveRequest>,
) -> Response {
    let game_id = match parse_key(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = MakeMoveCommand {
        game_id,
        user_name: req.user_name,
        cell: req.cell,
    };

    match handlers.make_move_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(GameResponse::from(result.game))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// DELETE /api/games/:key - Delete a finished game
pub async fn cancel_game(
    State(handlers): State<GameHandlers>,
    Path(key): Path<String>,
) -> Response {
    let game_id = match parse_key(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.cancel_handler.handle(CancelGameCommand { game_id }).await {
        Ok(result) => {
            (StatusCode::OK, Json(MessageResponse::new(result.message()))).into_response()
        }
        Err(e) => handle_game_error(e),
    }
}

/// GET /api/games/:key/history - Moves in play order
pub async fn get_game_history(
    State(handlers): State<GameHandlers>,
    Path(key): Path<String>,
) -> Response {
    let game_id = match parse_key(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .history_handler
        .handle(GetGameHistoryQuery { game_id })
        .await
    {
        Ok(history) => (StatusCode::OK, Json(HistoryResponse::from(history))).into_response(),
        Err(e) => handle_game_error(e),
    }
}

/// GET /api/games/average_moves - Cached average of moves remaining
pub async fn get_average_moves(State(handlers): State<GameHandlers>) -> Response {
    match handlers.average_handler.handle().await {
        Ok(message) => (StatusCode::OK, Json(MessageResponse::new(message))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read average moves");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// A key that is not a valid game ID cannot name an existing game.
fn parse_key(key: &str) -> Result<GameId, Response> {
    key.parse::<GameId>().map_err(|_| {
        ErrorResponse::new(ErrorCode::GameNotFound, format!("Game not found: {}", key))
            .into_response_with(StatusCode::NOT_FOUND)
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(error: &GameError) -> StatusCode {
    match error {
        GameError::NotFound(_) | GameError::UserNotFound(_) => StatusCode::NOT_FOUND,
        GameError::ValidationFailed { .. }
        | GameError::NotYourTurn
        | GameError::CellOccupied(_)
        | GameError::StillInProgress => StatusCode::BAD_REQUEST,
        GameError::GameOver | GameError::Conflict(_) => StatusCode::CONFLICT,
        // A drawn game has been deleted, so the key no longer resolves.
        GameError::DrawTermination(_) => StatusCode::NOT_FOUND,
        GameError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_game_error(error: GameError) -> Response {
    let status = status_for(&error);

    let body = match &error {
        GameError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Game request failed");
            ErrorResponse::internal()
        }
        GameError::DrawTermination(id) => ErrorResponse::new(error.code(), error.message())
            .with_details(serde_json::json!({ "key": id.to_string() })),
        _ => ErrorResponse::new(error.code(), error.message()),
    };

    body.into_response_with(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_game_error(GameError::NotFound(GameId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn turn_and_cell_errors_map_to_400() {
        assert_eq!(status_for(&GameError::NotYourTurn), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&GameError::CellOccupied(4)), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&GameError::StillInProgress), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn game_over_maps_to_409() {
        assert_eq!(status_for(&GameError::GameOver), StatusCode::CONFLICT);
    }

    #[test]
    fn concurrent_move_maps_to_409() {
        let response = handle_game_error(GameError::Conflict(GameId::new()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn draw_maps_to_404() {
        let response = handle_game_error(GameError::DrawTermination(GameId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_game_error(GameError::infrastructure("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_key_is_not_found() {
        let response = parse_key("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
