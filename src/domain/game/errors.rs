//! Game-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GameId};

/// Game-specific errors.
///
/// `DrawTermination` is not a fault: it reports that the move filled the
/// board without a line and the game has been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Game was not found.
    NotFound(GameId),
    /// A referenced user does not exist.
    UserNotFound(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The acting player is not the one whose turn it is.
    NotYourTurn,
    /// The game has already ended.
    GameOver,
    /// The target cell already holds a mark.
    CellOccupied(u8),
    /// Deletion requested while the game is still being played.
    StillInProgress,
    /// The move drew the game, which was deleted.
    DrawTermination(GameId),
    /// Another move was stored after this one's game was loaded.
    Conflict(GameId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl GameError {
    pub fn not_found(id: GameId) -> Self {
        GameError::NotFound(id)
    }
    pub fn user_not_found(name: impl Into<String>) -> Self {
        GameError::UserNotFound(name.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GameError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        GameError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NotFound(_) => ErrorCode::GameNotFound,
            GameError::UserNotFound(_) => ErrorCode::UserNotFound,
            GameError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GameError::NotYourTurn => ErrorCode::NotYourTurn,
            GameError::GameOver => ErrorCode::GameOver,
            GameError::CellOccupied(_) => ErrorCode::CellOccupied,
            GameError::StillInProgress => ErrorCode::GameInProgress,
            GameError::DrawTermination(_) => ErrorCode::GameDrawn,
            GameError::Conflict(_) => ErrorCode::GameConflict,
            GameError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            GameError::NotFound(id) => format!("Game not found: {}", id),
            GameError::UserNotFound(name) => format!("User not found: {}", name),
            GameError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GameError::NotYourTurn => "It's not your turn!".to_string(),
            GameError::GameOver => "Game already over".to_string(),
            GameError::CellOccupied(cell) => {
                format!("Invalid move. Cell {} already filled!", cell)
            }
            GameError::StillInProgress => "Game still in progress".to_string(),
            GameError::DrawTermination(_) => "It's a tie! Game has been deleted!".to_string(),
            GameError::Conflict(id) => {
                format!("Game {} changed while the move was played, reload it", id)
            }
            GameError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GameError {}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => GameError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::UserNotFound => GameError::UserNotFound(err.message),
            ErrorCode::GameOver | ErrorCode::InvalidStateTransition => GameError::GameOver,
            ErrorCode::NotYourTurn => GameError::NotYourTurn,
            ErrorCode::GameInProgress => GameError::StillInProgress,
            ErrorCode::GameConflict => {
                match err.details.get("key").and_then(|key| key.parse().ok()) {
                    Some(id) => GameError::Conflict(id),
                    None => GameError::Infrastructure(err.to_string()),
                }
            }
            _ => GameError::Infrastructure(err.to_string()),
        }
    }
}
