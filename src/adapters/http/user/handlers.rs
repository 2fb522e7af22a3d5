//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::game::GameListResponse;
use crate::adapters::http::error::{ErrorResponse, MessageResponse};
use crate::application::handlers::{
    CreateUserCommand, CreateUserHandler, GetUserGamesHandler, GetUserGamesQuery,
    GetUserRankingsHandler, GetUserScoresHandler, GetUserScoresQuery,
};
use crate::domain::user::UserError;

use super::dto::{CreateUserRequest, ScoreListResponse, UserListResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    create_handler: Arc<CreateUserHandler>,
    rankings_handler: Arc<GetUserRankingsHandler>,
    games_handler: Arc<GetUserGamesHandler>,
    scores_handler: Arc<GetUserScoresHandler>,
}

impl UserHandlers {
    pub fn new(
        create_handler: Arc<CreateUserHandler>,
        rankings_handler: Arc<GetUserRankingsHandler>,
        games_handler: Arc<GetUserGamesHandler>,
        scores_handler: Arc<GetUserScoresHandler>,
    ) -> Self {
        Self {
            create_handler,
            rankings_handler,
            games_handler,
            scores_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/users - Register a user
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let cmd = CreateUserCommand {
        name: req.user_name,
        email: req.email,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("User created successfully!")),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/users/ranking - Users by win percentage
pub async fn get_user_rankings(State(handlers): State<UserHandlers>) -> Response {
    match handlers.rankings_handler.handle().await {
        Ok(users) => (StatusCode::OK, Json(UserListResponse::from(users))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/users/:name/games - A user's games in progress
pub async fn get_user_games(
    State(handlers): State<UserHandlers>,
    Path(user_name): Path<String>,
) -> Response {
    match handlers
        .games_handler
        .handle(GetUserGamesQuery { user_name })
        .await
    {
        Ok(views) => (StatusCode::OK, Json(GameListResponse::from(views))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/users/:name/scores - A user's recorded matches
pub async fn get_user_scores(
    State(handlers): State<UserHandlers>,
    Path(user_name): Path<String>,
) -> Response {
    match handlers
        .scores_handler
        .handle(GetUserScoresQuery { user_name })
        .await
    {
        Ok(scores) => (StatusCode::OK, Json(ScoreListResponse::from(scores))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_user_error(error: UserError) -> Response {
    let status = match &error {
        UserError::NotFound(_) => StatusCode::NOT_FOUND,
        UserError::NameTaken(_) => StatusCode::CONFLICT,
        UserError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        UserError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "User request failed");
            return ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    ErrorResponse::new(error.code(), error.message()).into_response_with(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_user_error(UserError::not_found("ghost"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn name_taken_maps_to_409() {
        let response = handle_user_error(UserError::name_taken("alice"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_user_error(UserError::ValidationFailed {
            field: "email".to_string(),
            message: "missing @ symbol".to_string(),
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_user_error(UserError::infrastructure("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
