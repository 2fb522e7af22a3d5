//! Score domain module.
//!
//! A score is the permanent record of one won match. Drawn and cancelled
//! games produce no score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, ScoreId, Timestamp, UserId};

/// Result of a won match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    id: ScoreId,
    game_id: GameId,
    date: NaiveDate,
    winner: UserId,
    loser: UserId,
}

impl Score {
    /// Records a result dated today (UTC).
    pub fn new(game_id: GameId, winner: UserId, loser: UserId) -> Self {
        Self {
            id: ScoreId::new(),
            game_id,
            date: Timestamp::now().date(),
            winner,
            loser,
        }
    }

    /// Reconstitute a score from persistence.
    pub fn reconstitute(
        id: ScoreId,
        game_id: GameId,
        date: NaiveDate,
        winner: UserId,
        loser: UserId,
    ) -> Self {
        Self {
            id,
            game_id,
            date,
            winner,
            loser,
        }
    }

    pub fn id(&self) -> &ScoreId {
        &self.id
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn winner(&self) -> &UserId {
        &self.winner
    }

    pub fn loser(&self) -> &UserId {
        &self.loser
    }

    /// Returns true if the user won or lost this match.
    pub fn involves(&self, user_id: &UserId) -> bool {
        &self.winner == user_id || &self.loser == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_score_is_dated_today() {
        let score = Score::new(GameId::new(), UserId::new(), UserId::new());
        assert_eq!(score.date(), Timestamp::now().date());
    }

    #[test]
    fn involves_both_players_only() {
        let (winner, loser) = (UserId::new(), UserId::new());
        let score = Score::new(GameId::new(), winner, loser);
        assert!(score.involves(&winner));
        assert!(score.involves(&loser));
        assert!(!score.involves(&UserId::new()));
    }
}
