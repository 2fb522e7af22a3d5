//! TokioTaskDispatcher - runs background tasks on the tokio runtime.
//!
//! `dispatch` spawns the task and returns immediately. Failures inside a
//! task are logged; nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::{SendTurnEmailCommand, SendTurnEmailHandler};
use crate::ports::{DispatchError, Task, TaskDispatcher};

pub struct TokioTaskDispatcher {
    turn_email: Arc<SendTurnEmailHandler>,
}

impl TokioTaskDispatcher {
    pub fn new(turn_email: Arc<SendTurnEmailHandler>) -> Self {
        Self { turn_email }
    }
}

#[async_trait]
impl TaskDispatcher for TokioTaskDispatcher {
    async fn dispatch(&self, task: Task) -> Result<(), DispatchError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| DispatchError::Unavailable(e.to_string()))?;

        match task {
            Task::SendTurnEmail { user_id, game_id } => {
                let handler = self.turn_email.clone();
                runtime.spawn(async move {
                    let cmd = SendTurnEmailCommand { user_id, game_id };
                    if let Err(e) = handler.handle(cmd).await {
                        tracing::warn!(
                            game_id = %game_id,
                            user_id = %user_id,
                            error = %e,
                            "Turn email task failed"
                        );
                    }
                });
            }
        }
        Ok(())
    }
}
