//! Game statistics handlers.
//!
//! The average-moves announcement is computed by a background job and
//! served from the aggregate cache.

mod get_average_moves;
mod refresh_average_moves;

pub use get_average_moves::{GetAverageMovesHandler, NO_MOVES_REMAINING};
pub use refresh_average_moves::{RefreshAverageMovesHandler, RefreshOutcome};

use crate::domain::foundation::DomainError;
use crate::ports::CacheError;

/// Cache key holding the average-moves announcement.
pub const MOVES_REMAINING: &str = "MOVES_REMAINING";

/// Errors raised by the statistics handlers.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}
