//! CreateUserHandler - Command handler for registering a player.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// Command to register a user under a unique name.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserResult {
    pub user: User,
}

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<CreateUserResult, UserError> {
        let user = User::new(UserId::new(), cmd.name, cmd.email)?;

        if self.users.find_by_name(user.name()).await?.is_some() {
            return Err(UserError::name_taken(user.name()));
        }

        // The repository enforces uniqueness too, for concurrent registrations.
        self.users.save(&user).await?;

        tracing::info!(user_id = %user.id(), name = %user.name(), "User created");
        Ok(CreateUserResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockStore;

    fn command(name: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_user_with_zero_tallies() {
        let store = Arc::new(MockStore::new());
        let handler = CreateUserHandler::new(store.clone());

        let result = handler
            .handle(command("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(result.user.name(), "alice");
        assert_eq!(result.user.total_matches(), 0);
        assert!(store.user("alice").is_some());
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let store = Arc::new(MockStore::new());
        store.seed_user("alice");
        let handler = CreateUserHandler::new(store);

        let result = handler.handle(command("alice", "other@example.com")).await;

        assert_eq!(result.unwrap_err(), UserError::NameTaken("alice".to_string()));
    }

    #[tokio::test]
    async fn invalid_email_is_validation_error() {
        let store = Arc::new(MockStore::new());
        let handler = CreateUserHandler::new(store.clone());

        let result = handler.handle(command("alice", "not-an-email")).await;

        assert!(matches!(
            result,
            Err(UserError::ValidationFailed { ref field, .. }) if field == "email"
        ));
        assert!(store.user("alice").is_none());
    }

    #[tokio::test]
    async fn blank_name_is_validation_error() {
        let store = Arc::new(MockStore::new());
        let handler = CreateUserHandler::new(store);

        let result = handler.handle(command("   ", "a@example.com")).await;

        assert!(matches!(result, Err(UserError::ValidationFailed { .. })));
    }
}
