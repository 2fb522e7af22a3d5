//! PostgreSQL implementation of MatchRecorder.
//!
//! The won game, the new score and both users' tallies are written in one
//! transaction. The game row is locked first, so a second winning write
//! for the same game waits and then fails its state check. Any failure
//! rolls everything back.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::game::Game;
use crate::domain::score::Score;
use crate::ports::MatchRecorder;

use super::game_repository::{lock_for_move, update_game};
use super::score_repository::insert_score;
use super::user_repository::record_result;

#[derive(Clone)]
pub struct PostgresMatchRecorder {
    pool: PgPool,
}

impl PostgresMatchRecorder {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRecorder for PostgresMatchRecorder {
    async fn record_win(&self, game: &Game, score: &Score) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to start transaction: {}", e)))?;

        // Returning early drops `tx`, which rolls back.
        lock_for_move(&mut tx, game).await?;
        update_game(&mut *tx, game).await?;

        record_result(&mut *tx, score.winner(), true).await?;
        record_result(&mut *tx, score.loser(), false).await?;

        insert_score(&mut tx, score).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }
}
