//! RefreshAverageMovesHandler - recomputes the average-moves announcement.
//!
//! Runs over an owned snapshot of the in-progress games. With no games in
//! play the cached announcement is removed so readers fall back to the
//! default message.

use std::sync::Arc;

use crate::domain::game::average_remaining_moves;
use crate::ports::{AggregateCache, GameRepository};

use super::{StatsError, MOVES_REMAINING};

/// What a refresh left in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Updated { average: f64, games: usize },
    Cleared,
}

pub struct RefreshAverageMovesHandler {
    games: Arc<dyn GameRepository>,
    cache: Arc<dyn AggregateCache>,
}

impl RefreshAverageMovesHandler {
    pub fn new(games: Arc<dyn GameRepository>, cache: Arc<dyn AggregateCache>) -> Self {
        Self { games, cache }
    }

    pub async fn handle(&self) -> Result<RefreshOutcome, StatsError> {
        let snapshot = self.games.find_in_progress().await?;

        match average_remaining_moves(&snapshot) {
            Some(average) => {
                let message = format!("The average moves remaining is {:.2}", average);
                self.cache.set(MOVES_REMAINING, &message).await?;
                tracing::debug!(average, games = snapshot.len(), "Average moves refreshed");
                Ok(RefreshOutcome::Updated {
                    average,
                    games: snapshot.len(),
                })
            }
            None => {
                self.cache.delete(MOVES_REMAINING).await?;
                tracing::debug!("No games in progress, average moves cleared");
                Ok(RefreshOutcome::Cleared)
            }
        }
    }
}
