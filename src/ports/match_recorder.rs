//! Match recorder port.
//!
//! Ending a game with a winner touches four records: the game's terminal
//! state, a new score, and both players' tallies. They must become visible
//! together, so they are written through one call.

use crate::domain::foundation::DomainError;
use crate::domain::game::Game;
use crate::domain::score::Score;
use async_trait::async_trait;

/// Port for committing the end of a won game as one unit.
#[async_trait]
pub trait MatchRecorder: Send + Sync {
    /// Persist the won game and the score, and count the match for both
    /// players named by the score.
    ///
    /// Tallies are incremented in storage: the winner gains a win and a
    /// match, the loser a match. The game write follows the same rule as
    /// `GameRepository::update`. Either every write lands or none does.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if the game no longer exists
    /// - `GameConflict` if the stored game is no longer the one the
    ///   winning move was applied to
    /// - `UserNotFound` if either user no longer exists
    /// - `DatabaseError` on persistence failure
    async fn record_win(&self, game: &Game, score: &Score) -> Result<(), DomainError>;
}
