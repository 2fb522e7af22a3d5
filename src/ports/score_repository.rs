//! Score repository port (read side).
//!
//! Scores are only ever written through [`MatchRecorder`](super::MatchRecorder),
//! together with the game and tallies they belong to.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::score::Score;
use async_trait::async_trait;

/// Reader port for recorded match results.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Scores the user won or lost, most recent first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Score>, DomainError>;
}
