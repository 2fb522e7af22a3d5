//! HTTP routes for game endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_game, create_game, get_average_moves, get_game, get_game_history, make_move,
    GameHandlers,
};

/// Creates the game router with all endpoints.
///
/// The static `/average_moves` segment takes precedence over `/:key`.
pub fn game_routes(handlers: GameHandlers) -> Router {
    Router::new()
        .route("/", post(create_game))
        .route("/average_moves", get(get_average_moves))
        .route("/:key", get(get_game).put(make_move).delete(cancel_game))
        .route("/:key/history", get(get_game_history))
        .with_state(handlers)
}
