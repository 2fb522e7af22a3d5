//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod game;
pub mod notification;
pub mod stats;
pub mod user;

#[cfg(test)]
pub mod test_support;

pub use game::{
    CancelGameCommand, CancelGameHandler, CancelGameResult, CreateGameCommand,
    CreateGameHandler, GameHistory, GameView, GetGameHandler, GetGameHistoryHandler,
    GetGameHistoryQuery, GetGameQuery, MakeMoveCommand, MakeMoveHandler, MakeMoveResult,
};
pub use notification::{
    NotificationError, ReminderSummary, SendRemindersHandler, SendTurnEmailCommand,
    SendTurnEmailHandler,
};
pub use stats::{
    GetAverageMovesHandler, RefreshAverageMovesHandler, RefreshOutcome, StatsError,
    MOVES_REMAINING, NO_MOVES_REMAINING,
};
pub use user::{
    CreateUserCommand, CreateUserHandler, CreateUserResult, GetUserGamesHandler,
    GetUserGamesQuery, GetUserRankingsHandler, GetUserScoresHandler, GetUserScoresQuery,
    ScoreView,
};
