//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresUserRepository` - User directory with unique names
//! - `PostgresGameRepository` - Game aggregates (board and history as JSON text)
//! - `PostgresScoreRepository` - Recorded match results
//! - `PostgresMatchRecorder` - End-of-game writes in one transaction

mod game_repository;
mod match_recorder;
mod score_repository;
mod user_repository;

pub use game_repository::PostgresGameRepository;
pub use match_recorder::PostgresMatchRecorder;
pub use score_repository::PostgresScoreRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::DomainError;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Reads a column, mapping decode failures to a database error.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

/// Reads a non-negative INTEGER column as a tally.
pub(crate) fn count_column(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let value: i32 = column(row, name)?;
    u32::try_from(value)
        .map_err(|_| DomainError::database(format!("Negative {} in row: {}", name, value)))
}
