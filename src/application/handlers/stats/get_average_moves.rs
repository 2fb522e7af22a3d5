//! GetAverageMovesHandler - serves the cached average-moves announcement.

use std::sync::Arc;

use crate::ports::AggregateCache;

use super::{StatsError, MOVES_REMAINING};

/// Returned when no announcement is cached.
pub const NO_MOVES_REMAINING: &str = "No moves remaining!";

pub struct GetAverageMovesHandler {
    cache: Arc<dyn AggregateCache>,
}

impl GetAverageMovesHandler {
    pub fn new(cache: Arc<dyn AggregateCache>) -> Self {
        Self { cache }
    }

    pub async fn handle(&self) -> Result<String, StatsError> {
        Ok(self
            .cache
            .get(MOVES_REMAINING)
            .await?
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| NO_MOVES_REMAINING.to_string()))
    }
}
