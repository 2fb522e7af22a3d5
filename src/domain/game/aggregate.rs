//! Game aggregate entity.
//!
//! A game is one match between two registered players. It owns its board
//! and move history exclusively; players are referenced by ID only, the
//! user lifecycle belongs to the user module.

use serde::{Deserialize, Serialize};

use super::{GameError, GameStatus, Move, MoveOutcome};
use crate::domain::board::{Board, Symbol, CELL_COUNT};
use crate::domain::foundation::{GameId, StateMachine, Timestamp, UserId};

/// Game aggregate - the state machine for a single match.
///
/// # Invariants
///
/// - `next_to_move` is always `player_x` or `player_o` and alternates
///   after every accepted move, starting with `player_x`
/// - `winner` is set if and only if `status` is `Won`
/// - `history.len()` equals the number of occupied cells
/// - Terminal games accept no moves; the board is frozen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    board: Board,
    history: Vec<Move>,
    player_x: UserId,
    player_o: UserId,
    next_to_move: UserId,
    status: GameStatus,
    winner: Option<UserId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Game {
    /// Create a new game with an empty board and X to move.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if both seats name the same user
    pub fn new(id: GameId, player_x: UserId, player_o: UserId) -> Result<Self, GameError> {
        if player_x == player_o {
            return Err(GameError::validation(
                "player_o",
                "A player cannot play against themselves",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            board: Board::new(),
            history: Vec::new(),
            player_x,
            player_o,
            next_to_move: player_x,
            status: GameStatus::InProgress,
            winner: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a game from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: GameId,
        board: Board,
        history: Vec<Move>,
        player_x: UserId,
        player_o: UserId,
        next_to_move: UserId,
        status: GameStatus,
        winner: Option<UserId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            board,
            history,
            player_x,
            player_o,
            next_to_move,
            status,
            winner,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn player_x(&self) -> &UserId {
        &self.player_x
    }

    pub fn player_o(&self) -> &UserId {
        &self.player_o
    }

    pub fn next_to_move(&self) -> &UserId {
        &self.next_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&UserId> {
        self.winner.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Moves on the board before the latest one.
    ///
    /// Stores accept a write of this game only while their copy still holds
    /// exactly this many moves and is in progress.
    pub fn previous_move_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

        /// True once the game reached a terminal status.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the user holds either seat.
    pub fn is_participant(&self, user_id: &UserId) -> bool {
        &self.player_x == user_id || &self.player_o == user_id
    }

    /// The mark a participant plays with.
    pub fn symbol_of(&self, user_id: &UserId) -> Option<Symbol> {
        if &self.player_x == user_id {
            Some(Symbol::X)
        } else if &self.player_o == user_id {
            Some(Symbol::O)
        } else {
            None
        }
    }

    /// The participant playing `symbol`.
    pub fn player_for(&self, symbol: Symbol) -> &UserId {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }

    /// The other seat.
    pub fn opponent_of(&self, user_id: &UserId) -> &UserId {
        if &self.player_x == user_id {
            &self.player_o
        } else {
            &self.player_x
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a move for `actor` at `cell`.
    ///
    /// Checks run in a fixed order: game over, turn, range, occupancy.
    /// A rejected move leaves the game untouched. On acceptance the turn
    /// passes to the other player even when the move ends the game.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game is terminal
    /// - `NotYourTurn` if `actor` is not `next_to_move`
    /// - `ValidationFailed` if `cell` is outside 0..=8
    /// - `CellOccupied` if the cell already holds a mark
    pub fn apply_move(&mut self, actor: &UserId, cell: i64) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;

        if actor != &self.next_to_move {
            return Err(GameError::NotYourTurn);
        }

        let index = Self::validate_cell(cell)?;
        if !self.board.cells()[index].is_empty() {
            return Err(GameError::CellOccupied(index as u8));
        }

        let symbol = self.symbol_of(actor).ok_or(GameError::NotYourTurn)?;

        self.board.place(index, symbol);
        self.history.push(Move::new(symbol, index as u8));
        self.next_to_move = *self.opponent_of(actor);
        self.updated_at = Timestamp::now();

        if let Some(line_owner) = self.board.winner() {
            self.status = self.status.transition_to(GameStatus::Won)?;
            let winner = *self.player_for(line_owner);
            self.winner = Some(winner);
            return Ok(MoveOutcome::Won {
                winner,
                loser: *self.opponent_of(&winner),
            });
        }

        if self.board.is_full() {
            self.status = self.status.transition_to(GameStatus::Drawn)?;
            return Ok(MoveOutcome::Drawn);
        }

        Ok(MoveOutcome::Continued {
            next_to_move: self.next_to_move,
        })
    }

    /// Checks that the game may be deleted.
    ///
    /// # Errors
    ///
    /// - `StillInProgress` while the game is being played
    pub fn ensure_finished(&self) -> Result<(), GameError> {
        if self.is_over() {
            Ok(())
        } else {
            Err(GameError::StillInProgress)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    fn validate_cell(cell: i64) -> Result<usize, GameError> {
        if (0..CELL_COUNT as i64).contains(&cell) {
            Ok(cell as usize)
        } else {
            Err(GameError::validation(
                "move",
                "Invalid move. Must be between 0 and 8!",
            ))
        }
    }
}
