//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ScoreView;
use crate::domain::user::User;

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub user_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub wins: u32,
    pub total_matches: u32,
    pub win_percent: f64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().to_string(),
            wins: user.wins(),
            total_matches: user.total_matches(),
            win_percent: user.win_percent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            items: users.iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub date: String,
    pub winner: String,
    pub loser: String,
}

impl From<ScoreView> for ScoreResponse {
    fn from(view: ScoreView) -> Self {
        Self {
            date: view.date,
            winner: view.winner,
            loser: view.loser,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreListResponse {
    pub items: Vec<ScoreResponse>,
}

impl From<Vec<ScoreView>> for ScoreListResponse {
    fn from(views: Vec<ScoreView>) -> Self {
        Self {
            items: views.into_iter().map(ScoreResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn user_response_includes_win_percent() {
        let mut user =
            User::new(UserId::new(), "alice".to_string(), "a@example.com".to_string()).unwrap();
        user.add_win();
        user.add_loss();

        let response = UserResponse::from(&user);

        assert_eq!(response.wins, 1);
        assert_eq!(response.total_matches, 2);
        assert!((response.win_percent - 50.0).abs() < f64::EPSILON);
    }
}
