//! Task dispatcher port.
//!
//! Fire-and-forget background work. Dispatching returns as soon as the
//! task is queued; the task's own success or failure is never reported
//! back to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, UserId};

/// Background tasks the application can schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    /// Tell a player it is their turn in a game.
    SendTurnEmail { user_id: UserId, game_id: GameId },
}

/// Errors raised while queueing a task.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Task queue unavailable: {0}")]
    Unavailable(String),
}

/// Port for scheduling background tasks.
#[async_trait]
pub trait TaskDispatcher: Send + Sync {
    /// Queue a task for asynchronous execution.
    async fn dispatch(&self, task: Task) -> Result<(), DispatchError>;
}
