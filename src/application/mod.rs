//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) are kept separate.

pub mod handlers;

pub use handlers::{
    CancelGameCommand, CancelGameHandler, CreateGameCommand, CreateGameHandler,
    CreateUserCommand, CreateUserHandler, GameView, GetAverageMovesHandler, GetGameHandler,
    GetGameHistoryHandler, GetGameQuery, GetUserGamesHandler, GetUserRankingsHandler,
    GetUserScoresHandler, MakeMoveCommand, MakeMoveHandler, RefreshAverageMovesHandler,
    SendRemindersHandler, SendTurnEmailHandler,
};
