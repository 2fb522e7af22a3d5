//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_user, get_user_games, get_user_rankings, get_user_scores, UserHandlers,
};

/// Creates the user router with all endpoints.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/ranking", get(get_user_rankings))
        .route("/:name/games", get(get_user_games))
        .route("/:name/scores", get(get_user_scores))
        .with_state(handlers)
}
