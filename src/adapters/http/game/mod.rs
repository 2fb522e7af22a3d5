//! HTTP adapter for game endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateGameRequest, GameListResponse, GameResponse, HistoryResponse, MakeMoveRequest,
    MoveResponse,
};
pub use handlers::GameHandlers;
pub use routes::game_routes;
