//! PostgreSQL implementation of ScoreRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, GameId, ScoreId, UserId};
use crate::domain::score::Score;
use crate::ports::ScoreRepository;

use super::column;

#[derive(Clone)]
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Score>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, game_id, date, winner, loser
            FROM scores
            WHERE winner = $1 OR loser = $1
            ORDER BY date DESC, recorded_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch scores: {}", e)))?;

        rows.iter().map(row_to_score).collect()
    }
}

/// Inserts a score inside the caller's transaction.
pub(super) async fn insert_score(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    score: &Score,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO scores (id, game_id, date, winner, loser)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(score.id().as_uuid())
    .bind(score.game_id().as_uuid())
    .bind(score.date())
    .bind(score.winner().as_uuid())
    .bind(score.loser().as_uuid())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::database(format!("Failed to insert score: {}", e)))?;

    Ok(())
}

fn row_to_score(row: &PgRow) -> Result<Score, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let game_id: uuid::Uuid = column(row, "game_id")?;
    let winner: uuid::Uuid = column(row, "winner")?;
    let loser: uuid::Uuid = column(row, "loser")?;

    Ok(Score::reconstitute(
        ScoreId::from_uuid(id),
        GameId::from_uuid(game_id),
        column(row, "date")?,
        UserId::from_uuid(winner),
        UserId::from_uuid(loser),
    ))
}
