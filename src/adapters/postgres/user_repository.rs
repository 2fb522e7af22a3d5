//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::{column, count_column};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, name, email, wins, total_matches, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, wins, total_matches, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email())
        .bind(user.wins() as i32)
        .bind(user.total_matches() as i32)
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(ErrorCode::NameTaken, user.name()))
            }
            Err(e) => Err(DomainError::database(format!("Failed to insert user: {}", e))),
        }
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET wins = $2, total_matches = $3 WHERE id = $1")
            .bind(user.id().as_uuid())
            .bind(user.wins() as i32)
            .bind(user.total_matches() as i32)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(user.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE name = $1", USER_COLUMNS))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user by name: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_ranked(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM users
            WHERE total_matches > 0
            ORDER BY wins::float8 / total_matches DESC, name ASC
            "#,
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch rankings: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn find_with_email(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email <> '' ORDER BY name",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }
}

/// Counts one finished match for the user, and a win if `won`.
///
/// The increment happens in the database, so concurrent results for the
/// same user all count.
pub(super) async fn record_result<'e, E>(
    executor: E,
    user_id: &UserId,
    won: bool,
) -> Result<(), DomainError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let result = sqlx::query(
        r#"
        UPDATE users SET
            wins = wins + $2,
            total_matches = total_matches + 1
        WHERE id = $1
        "#,
    )
    .bind(user_id.as_uuid())
    .bind(i32::from(won))
    .execute(executor)
    .await
    .map_err(|e| DomainError::database(format!("Failed to update tallies: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(not_found(user_id));
    }
    Ok(())
}

fn not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        column(row, "name")?,
        column(row, "email")?,
        count_column(row, "wins")?,
        count_column(row, "total_matches")?,
        Timestamp::from_datetime(created_at),
    ))
}
