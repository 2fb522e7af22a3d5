//! User repository port.
//!
//! The user directory: registration, lookup by ID or unique name, and the
//! queries behind rankings and reminder emails.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for User persistence.
///
/// Implementations must enforce name uniqueness on `save`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a newly registered user.
    ///
    /// # Errors
    ///
    /// - `NameTaken` if another user already holds the name
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Update an existing user's tallies.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by exact name. Returns `None` if not found.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError>;

    /// Users with at least one finished match, best win percentage first.
    async fn find_ranked(&self) -> Result<Vec<User>, DomainError>;

    /// All users that have an email address on file.
    async fn find_with_email(&self) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
