//! PostgreSQL implementation of GameRepository.
//!
//! The board and move history are stored as JSON text columns; the
//! remaining fields map one-to-one onto columns. `move_count` mirrors the
//! history length so a move can be stored only on top of the row it was
//! applied to.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::board::Board;
use crate::domain::foundation::{DomainError, ErrorCode, GameId, Timestamp, UserId};
use crate::domain::game::{Game, GameStatus, Move};
use crate::ports::GameRepository;

use super::{column, count_column};

/// PostgreSQL implementation of GameRepository.
#[derive(Clone)]
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const GAME_COLUMNS: &str = "id, board, history, player_x, player_o, next_to_move, \
                            status, winner, created_at, updated_at";

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        let (board, history) = encode_state(game)?;

        sqlx::query(
            r#"
            INSERT INTO games (
                id, board, history, player_x, player_o, next_to_move,
                status, winner, created_at, updated_at, move_count
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(game.id().as_uuid())
        .bind(board)
        .bind(history)
        .bind(game.player_x().as_uuid())
        .bind(game.player_o().as_uuid())
        .bind(game.next_to_move().as_uuid())
        .bind(game.status().as_str())
        .bind(game.winner().map(|id| *id.as_uuid()))
        .bind(game.created_at().as_datetime())
        .bind(game.updated_at().as_datetime())
        .bind(game.history().len() as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert game: {}", e)))?;

        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to start transaction: {}", e)))?;

        lock_for_move(&mut tx, game).await?;
        update_game(&mut *tx, game).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM games WHERE id = $1", GAME_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch game: {}", e)))?;

        row.as_ref().map(row_to_game).transpose()
    }

    async fn delete(&self, id: &GameId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete game: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find_in_progress(&self) -> Result<Vec<Game>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM games WHERE status = $1 ORDER BY created_at",
            GAME_COLUMNS
        ))
        .bind(GameStatus::InProgress.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch games: {}", e)))?;

        rows.iter().map(row_to_game).collect()
    }

    async fn find_active_by_player(&self, user_id: &UserId) -> Result<Vec<Game>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM games
            WHERE status = $1 AND (player_x = $2 OR player_o = $2)
            ORDER BY created_at
            "#,
            GAME_COLUMNS
        ))
        .bind(GameStatus::InProgress.as_str())
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch games by player: {}", e)))?;

        rows.iter().map(row_to_game).collect()
    }
}

/// Locks the stored row and checks it is the state `game` moved from.
///
/// The lock is held until the caller's transaction ends.
pub(super) async fn lock_for_move(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    game: &Game,
) -> Result<(), DomainError> {
    let row = sqlx::query("SELECT status, move_count FROM games WHERE id = $1 FOR UPDATE")
        .bind(game.id().as_uuid())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to lock game: {}", e)))?
        .ok_or_else(|| not_found(game.id()))?;

    let status: String = column(&row, "status")?;
    check_stored_state(game, parse_status(&status)?, count_column(&row, "move_count")?)
}

/// Writes a game's mutable state over the row it was loaded from.
///
/// # Errors
///
/// - `GameConflict` if the row finished or gained a move in the meantime
pub(super) async fn update_game<'e, E>(executor: E, game: &Game) -> Result<(), DomainError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let (board, history) = encode_state(game)?;

    let result = sqlx::query(
        r#"
        UPDATE games SET
            board = $2,
            history = $3,
            next_to_move = $4,
            status = $5,
            winner = $6,
            updated_at = $7,
            move_count = $8
        WHERE id = $1 AND status = $9 AND move_count = $10
        "#,
    )
    .bind(game.id().as_uuid())
    .bind(board)
    .bind(history)
    .bind(game.next_to_move().as_uuid())
    .bind(game.status().as_str())
    .bind(game.winner().map(|id| *id.as_uuid()))
    .bind(game.updated_at().as_datetime())
    .bind(game.history().len() as i32)
    .bind(GameStatus::InProgress.as_str())
    .bind(game.previous_move_count() as i32)
    .execute(executor)
    .await
    .map_err(|e| DomainError::database(format!("Failed to update game: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(DomainError::game_conflict(game.id()));
    }
    Ok(())
}

fn not_found(id: &GameId) -> DomainError {
    DomainError::new(ErrorCode::GameNotFound, format!("Game not found: {}", id))
}

/// A stored game may be replaced only while in progress and one move behind.
fn check_stored_state(
    game: &Game,
    stored_status: GameStatus,
    stored_moves: u32,
) -> Result<(), DomainError> {
    if stored_status.is_in_progress() && stored_moves as usize == game.previous_move_count() {
        Ok(())
    } else {
        Err(DomainError::game_conflict(game.id()))
    }
}

fn parse_status(value: &str) -> Result<GameStatus, DomainError> {
    GameStatus::parse(value)
        .ok_or_else(|| DomainError::database(format!("Unknown game status: {}", value)))
}

fn encode_state(game: &Game) -> Result<(String, String), DomainError> {
    let board = serde_json::to_string(game.board())
        .map_err(|e| DomainError::database(format!("Failed to encode board: {}", e)))?;
    let history = serde_json::to_string(game.history())
        .map_err(|e| DomainError::database(format!("Failed to encode history: {}", e)))?;
    Ok((board, history))
}

fn decode_state(
    id: &uuid::Uuid,
    board_json: &str,
    history_json: &str,
) -> Result<(Board, Vec<Move>), DomainError> {
    let board: Board = serde_json::from_str(board_json)
        .map_err(|e| DomainError::database(format!("Corrupt board for game {}: {}", id, e)))?;
    let history: Vec<Move> = serde_json::from_str(history_json)
        .map_err(|e| DomainError::database(format!("Corrupt history for game {}: {}", id, e)))?;
    Ok((board, history))
}

fn row_to_game(row: &PgRow) -> Result<Game, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;

    let board_json: String = column(row, "board")?;
    let history_json: String = column(row, "history")?;
    let (board, history) = decode_state(&id, &board_json, &history_json)?;

    let status_str: String = column(row, "status")?;
    let status = parse_status(&status_str)?;

    let player_x: uuid::Uuid = column(row, "player_x")?;
    let player_o: uuid::Uuid = column(row, "player_o")?;
    let next_to_move: uuid::Uuid = column(row, "next_to_move")?;
    let winner: Option<uuid::Uuid> = column(row, "winner")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(Game::reconstitute(
        GameId::from_uuid(id),
        board,
        history,
        UserId::from_uuid(player_x),
        UserId::from_uuid(player_o),
        UserId::from_uuid(next_to_move),
        status,
        winner.map(UserId::from_uuid),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
