//! Game command and query handlers.

mod cancel_game;
mod create_game;
mod get_game;
mod get_game_history;
mod make_move;
mod view;

pub use cancel_game::{CancelGameCommand, CancelGameHandler, CancelGameResult};
pub use create_game::{CreateGameCommand, CreateGameHandler};
pub use get_game::{GetGameHandler, GetGameQuery};
pub use get_game_history::{GameHistory, GetGameHistoryHandler, GetGameHistoryQuery};
pub use make_move::{MakeMoveCommand, MakeMoveHandler, MakeMoveResult};
pub use view::GameView;
