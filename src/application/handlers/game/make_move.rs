//! MakeMoveHandler - Command handler for playing a move.
//!
//! Drives the game state machine and applies what each outcome requires:
//!
//! - **Continued**: persist the game, then ask the other player to move
//! - **Won**: commit the game, the score and both tallies in one write
//! - **Drawn**: store the final move, delete the game and report
//!   `DrawTermination`
//!
//! Every write is checked against the stored game. When two moves race on
//! the same game the later write fails with `GameError::Conflict` and
//! nothing it would have caused happens.

use std::sync::Arc;

use crate::domain::foundation::{GameId, UserId};
use crate::domain::game::{Game, GameError, MoveOutcome};
use crate::domain::score::Score;
use crate::ports::{GameRepository, MatchRecorder, Task, TaskDispatcher, UserRepository};

use super::GameView;

/// Command to place the acting user's mark.
#[derive(Debug, Clone)]
pub struct MakeMoveCommand {
    pub game_id: GameId,
    pub user_name: String,
    /// Cell index as sent by the caller; range-checked by the game.
    pub cell: i64,
}

/// Result of an accepted move that did not end in a draw.
#[derive(Debug, Clone)]
pub struct MakeMoveResult {
    pub game: GameView,
    pub outcome: MoveOutcome,
}

/// Handler for playing moves.
pub struct MakeMoveHandler {
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
    recorder: Arc<dyn MatchRecorder>,
    dispatcher: Arc<dyn TaskDispatcher>,
}

impl MakeMoveHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        games: Arc<dyn GameRepository>,
        recorder: Arc<dyn MatchRecorder>,
        dispatcher: Arc<dyn TaskDispatcher>,
    ) -> Self {
        Self {
            users,
            games,
            recorder,
            dispatcher,
        }
    }

    pub async fn handle(&self, cmd: MakeMoveCommand) -> Result<MakeMoveResult, GameError> {
        // 1. Load game
        let mut game = self
            .games
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or(GameError::NotFound(cmd.game_id))?;

        // 2. A finished game is reported before the actor is looked up
        if game.is_over() {
            return Err(GameError::GameOver);
        }

        // 3. Resolve actor
        let actor = self
            .users
            .find_by_name(&cmd.user_name)
            .await?
            .ok_or_else(|| GameError::user_not_found(&cmd.user_name))?;

        // 4. Apply
        let outcome = game.apply_move(actor.id(), cmd.cell)?;
        tracing::debug!(
            game_id = %game.id(),
            player = %actor.name(),
            cell = cmd.cell,
            "Move applied"
        );

        // 5. Side effects per outcome
        match &outcome {
            MoveOutcome::Continued { next_to_move } => {
                self.games.update(&game).await?;
                self.notify_turn(*next_to_move, *game.id()).await;
            }
            MoveOutcome::Won { winner, loser } => {
                self.record_win(&game, winner, loser).await?;
            }
            MoveOutcome::Drawn => {
                self.games.update(&game).await?;
                self.games.delete(game.id()).await?;
                tracing::info!(game_id = %game.id(), "Game drawn and deleted");
                return Err(GameError::DrawTermination(*game.id()));
            }
        }

        let view = GameView::resolve(&game, self.users.as_ref()).await?;
        Ok(MakeMoveResult {
            game: view,
            outcome,
        })
    }

    async fn record_win(
        &self,
        game: &Game,
        winner_id: &UserId,
        loser_id: &UserId,
    ) -> Result<(), GameError> {
        let score = Score::new(*game.id(), *winner_id, *loser_id);
        self.recorder.record_win(game, &score).await?;

        tracing::info!(
            game_id = %game.id(),
            winner = %winner_id,
            loser = %loser_id,
            "Game won"
        );
        Ok(())
    }

    /// Best effort: a queue failure never fails the move.
    async fn notify_turn(&self, user_id: UserId, game_id: GameId) {
        if let Err(e) = self
            .dispatcher
            .dispatch(Task::SendTurnEmail { user_id, game_id })
            .await
        {
            tracing::warn!(
                game_id = %game_id,
                user_id = %user_id,
                error = %e,
                "Failed to schedule turn notification"
            );
        }
    }
}
