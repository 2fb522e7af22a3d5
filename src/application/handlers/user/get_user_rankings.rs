//! GetUserRankingsHandler - players ordered by win percentage.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub struct GetUserRankingsHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserRankingsHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Users with at least one finished match, best win percentage first.
    pub async fn handle(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.find_ranked().await?)
    }
}
