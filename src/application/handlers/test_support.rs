//! Mock ports shared by the handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, UserId};
use crate::domain::game::Game;
use crate::domain::score::Score;
use crate::domain::user::User;
use crate::ports::{
    AggregateCache, CacheError, DispatchError, EmailMessage, GameRepository, Mailer, MailerError,
    MatchRecorder, ScoreRepository, Task, TaskDispatcher, UserRepository,
};

/// Users, games and scores behind simple mutexes.
#[derive(Default)]
pub struct MockStore {
    users: Mutex<Vec<User>>,
    games: Mutex<Vec<Game>>,
    scores: Mutex<Vec<Score>>,
    fail_writes: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails with a database error.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn seed_user(&self, name: &str) -> User {
        let user = User::new(UserId::new(), name.to_string(), format!("{}@example.com", name))
            .unwrap();
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn seed_game(&self, game: Game) {
        self.games.lock().unwrap().push(game);
    }

    pub fn user(&self, name: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.name() == name).cloned()
    }

    pub fn game(&self, id: &GameId) -> Option<Game> {
        self.games.lock().unwrap().iter().find(|g| g.id() == id).cloned()
    }

    pub fn games(&self) -> Vec<Game> {
        self.games.lock().unwrap().clone()
    }

    pub fn scores(&self) -> Vec<Score> {
        self.scores.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::database("Simulated write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockStore {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.name() == user.name()) {
            return Err(DomainError::new(ErrorCode::NameTaken, user.name()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::UserNotFound, user.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        Ok(self.user(name))
    }

    async fn find_ranked(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.total_matches() > 0)
            .cloned()
            .collect();
        users.sort_by(|a, b| b.win_percent().total_cmp(&a.win_percent()));
        Ok(users)
    }

    async fn find_with_email(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[async_trait]
impl GameRepository for MockStore {
    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        self.check_writable()?;
        self.games.lock().unwrap().push(game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut games = self.games.lock().unwrap();
        let slot = games
            .iter_mut()
            .find(|g| g.id() == game.id())
            .ok_or_else(|| DomainError::new(ErrorCode::GameNotFound, game.id().to_string()))?;
        if !slot.status().is_in_progress() || slot.history().len() != game.previous_move_count() {
            return Err(DomainError::game_conflict(game.id()));
        }
        *slot = game.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.game(id))
    }

    async fn delete(&self, id: &GameId) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut games = self.games.lock().unwrap();
        let before = games.len();
        games.retain(|g| g.id() != id);
        if games.len() == before {
            return Err(DomainError::new(ErrorCode::GameNotFound, id.to_string()));
        }
        Ok(())
    }

    async fn find_in_progress(&self) -> Result<Vec<Game>, DomainError> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.status().is_in_progress())
            .cloned()
            .collect())
    }

    async fn find_active_by_player(&self, user_id: &UserId) -> Result<Vec<Game>, DomainError> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.status().is_in_progress() && g.is_participant(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ScoreRepository for MockStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Score>, DomainError> {
        Ok(self
            .scores
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.involves(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MatchRecorder for MockStore {
    async fn record_win(&self, game: &Game, score: &Score) -> Result<(), DomainError> {
        self.check_writable()?;
        GameRepository::update(self, game).await?;
        for user in self.users.lock().unwrap().iter_mut() {
            if user.id() == score.winner() {
                user.add_win();
            } else if user.id() == score.loser() {
                user.add_loss();
            }
        }
        self.scores.lock().unwrap().push(score.clone());
        Ok(())
    }
}

/// Records dispatched tasks instead of running them.
#[derive(Default)]
pub struct MockDispatcher {
    tasks: Mutex<Vec<Task>>,
    fail: bool,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskDispatcher for MockDispatcher {
    async fn dispatch(&self, task: Task) -> Result<(), DispatchError> {
        if self.fail {
            return Err(DispatchError::Unavailable("Simulated queue outage".to_string()));
        }
        self.tasks.lock().unwrap().push(task);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl AggregateCache for MockCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailerError> {
        if self.fail {
            return Err(MailerError::Transport("Simulated outage".to_string()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}
