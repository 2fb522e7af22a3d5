//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod error;
pub mod game;
pub mod user;

use axum::Router;

pub use error::{ErrorResponse, MessageResponse};
pub use game::{game_routes, GameHandlers};
pub use user::{user_routes, UserHandlers};

/// Mounts every module router under `/api`.
pub fn api_router(games: GameHandlers, users: UserHandlers) -> Router {
    Router::new()
        .nest("/api/games", game_routes(games))
        .nest("/api/users", user_routes(users))
}
