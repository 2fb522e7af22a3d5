//! User account entity.
//!
//! A user owns a unique display name, a contact email and the match
//! tallies used for ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Maximum length for user names.
pub const MAX_NAME_LENGTH: usize = 64;

/// A registered player.
///
/// # Invariants
///
/// - `name` is non-empty and at most 64 characters
/// - `email` contains an `@`
/// - `wins <= total_matches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    wins: u32,
    total_matches: u32,
    created_at: Timestamp,
}

impl User {
    /// Register a new user with zeroed tallies.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or email is blank
    /// - `InvalidFormat` if the name is too long or the email has no `@`
    pub fn new(id: UserId, name: String, email: String) -> Result<Self, ValidationError> {
        let name = Self::validate_name(name)?;
        let email = Self::validate_email(email)?;

        Ok(Self {
            id,
            name,
            email,
            wins: 0,
            total_matches: 0,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        wins: u32,
        total_matches: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            wins,
            total_matches,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn total_matches(&self) -> u32 {
        self.total_matches
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Share of matches won, as a percentage. Zero before the first match.
    pub fn win_percent(&self) -> f64 {
        if self.total_matches == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.total_matches) * 100.0
    }

    /// Records a won match.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.total_matches += 1;
    }

    /// Records a lost match.
    pub fn add_loss(&mut self) {
        self.total_matches += 1;
    }

    fn validate_name(name: String) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("user_name"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "user_name",
                format!("must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }

    fn validate_email(email: String) -> Result<String, ValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(trimmed.to_string())
    }
}
