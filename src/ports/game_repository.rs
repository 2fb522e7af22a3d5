//! Game repository port.
//!
//! Load-by-key, save and delete for Game aggregates, plus the snapshot
//! queries used by statistics and reminders.
//!
//! # Concurrency
//!
//! The game state machine does no locking of its own. `update` is a
//! compare-and-swap: it only replaces a stored game that is still in
//! progress and holds `previous_move_count()` moves, so of two moves
//! applied to the same loaded game only the first is stored.

use crate::domain::foundation::{DomainError, GameId, UserId};
use crate::domain::game::Game;
use async_trait::async_trait;

/// Repository port for Game aggregate persistence.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Save a new game.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, game: &Game) -> Result<(), DomainError>;

    /// Store a game one move past the stored copy.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if the game doesn't exist
    /// - `GameConflict` if the stored copy finished or gained a move since
    ///   this game was loaded
    /// - `DatabaseError` on persistence failure
    async fn update(&self, game: &Game) -> Result<(), DomainError>;

    /// Find a game by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError>;

    /// Permanently delete a game.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if the game doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &GameId) -> Result<(), DomainError>;

    /// Owned snapshot of every game still in progress.
    async fn find_in_progress(&self) -> Result<Vec<Game>, DomainError>;

    /// In-progress games in which the user holds either seat.
    async fn find_active_by_player(&self, user_id: &UserId) -> Result<Vec<Game>, DomainError>;
}
