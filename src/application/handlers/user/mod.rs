//! User command and query handlers.
//!
//! Registration, rankings, and the per-player game and score listings.

mod create_user;
mod get_user_games;
mod get_user_rankings;
mod get_user_scores;

pub use create_user::{CreateUserCommand, CreateUserHandler, CreateUserResult};
pub use get_user_games::{GetUserGamesHandler, GetUserGamesQuery};
pub use get_user_rankings::GetUserRankingsHandler;
pub use get_user_scores::{GetUserScoresHandler, GetUserScoresQuery, ScoreView};
