//! In-memory implementation of the persistence ports.
//!
//! One `InMemoryStore` backs users, games and scores behind a single
//! lock, so `record_win` commits all four records under one write guard.
//! Game writes are checked against the stored copy under that guard, and
//! tallies are incremented on the stored users.
//! Used when no database is configured and by the integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, UserId};
use crate::domain::game::Game;
use crate::domain::score::Score;
use crate::domain::user::User;
use crate::ports::{GameRepository, MatchRecorder, ScoreRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    games: HashMap<GameId, Game>,
    scores: Vec<Score>,
}

impl Tables {
    fn name_taken(&self, user: &User) -> bool {
        self.users
            .values()
            .any(|existing| existing.name() == user.name() && existing.id() != user.id())
    }

    /// The stored copy must be the game `game` was one move ago.
    fn check_next_move(&self, game: &Game) -> Result<(), DomainError> {
        let stored = self
            .games
            .get(game.id())
            .ok_or_else(|| game_not_found(game.id()))?;
        if !stored.status().is_in_progress() || stored.history().len() != game.previous_move_count()
        {
            return Err(DomainError::game_conflict(game.id()));
        }
        Ok(())
    }
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn user_not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
}

fn game_not_found(id: &GameId) -> DomainError {
    DomainError::new(ErrorCode::GameNotFound, format!("Game not found: {}", id))
}

/// Oldest first, so listings are stable across calls.
fn by_creation(mut games: Vec<Game>) -> Vec<Game> {
    games.sort_by_key(|g| *g.created_at());
    games
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.name_taken(user) {
            return Err(DomainError::new(ErrorCode::NameTaken, user.name()));
        }
        tables.users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(user.id()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(user_not_found(user.id())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.name() == name)
            .cloned())
    }

    async fn find_ranked(&self) -> Result<Vec<User>, DomainError> {
        let mut ranked: Vec<User> = self
            .tables
            .read()
            .await
            .users
            .values()
            .filter(|u| u.total_matches() > 0)
            .cloned()
            .collect();
        ranked.sort_by(|a, b| {
            b.win_percent()
                .total_cmp(&a.win_percent())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(ranked)
    }

    async fn find_with_email(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self
            .tables
            .read()
            .await
            .users
            .values()
            .filter(|u| !u.email().is_empty())
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(users)
    }
}

#[async_trait]
impl GameRepository for InMemoryStore {
    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        self.tables.write().await.games.insert(*game.id(), game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.check_next_move(game)?;
        tables.games.insert(*game.id(), game.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.tables.read().await.games.get(id).cloned())
    }

    async fn delete(&self, id: &GameId) -> Result<(), DomainError> {
        match self.tables.write().await.games.remove(id) {
            Some(_) => Ok(()),
            None => Err(game_not_found(id)),
        }
    }

    async fn find_in_progress(&self) -> Result<Vec<Game>, DomainError> {
        let games = self
            .tables
            .read()
            .await
            .games
            .values()
            .filter(|g| g.status().is_in_progress())
            .cloned()
            .collect();
        Ok(by_creation(games))
    }

    async fn find_active_by_player(&self, user_id: &UserId) -> Result<Vec<Game>, DomainError> {
        let games = self
            .tables
            .read()
            .await
            .games
            .values()
            .filter(|g| g.status().is_in_progress() && g.is_participant(user_id))
            .cloned()
            .collect();
        Ok(by_creation(games))
    }
}

#[async_trait]
impl ScoreRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Score>, DomainError> {
        let tables = self.tables.read().await;
        // Newest first; scores are appended in the order they were recorded.
        Ok(tables
            .scores
            .iter()
            .rev()
            .filter(|s| s.involves(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MatchRecorder for InMemoryStore {
    async fn record_win(&self, game: &Game, score: &Score) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        // Validate everything before touching anything.
        tables.check_next_move(game)?;
        for id in [score.winner(), score.loser()] {
            if !tables.users.contains_key(id) {
                return Err(user_not_found(id));
            }
        }

        tables.games.insert(*game.id(), game.clone());
        if let Some(winner) = tables.users.get_mut(score.winner()) {
            winner.add_win();
        }
        if let Some(loser) = tables.users.get_mut(score.loser()) {
            loser.add_loss();
        }
        tables.scores.push(score.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(UserId::new(), name.to_string(), format!("{}@example.com", name)).unwrap()
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected() {
        let store = InMemoryStore::new();
        UserRepository::save(&store, &user("alice")).await.unwrap();

        let err = UserRepository::save(&store, &user("alice")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NameTaken);
    }

    #[tokio::test]
    async fn clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();
        let alice = user("alice");
        UserRepository::save(&store, &alice).await.unwrap();

        assert!(other.find_by_name("alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn ranking_skips_users_without_matches() {
        let store = InMemoryStore::new();
        let mut alice = user("alice");
        let mut bob = user("bob");
        let carol = user("carol");
        alice.add_win();
        bob.add_win();
        bob.add_loss();
        for u in [&alice, &bob, &carol] {
            UserRepository::save(&store, u).await.unwrap();
        }

        let ranked = store.find_ranked().await.unwrap();

        let names: Vec<&str> = ranked.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn delete_missing_game_is_not_found() {
        let store = InMemoryStore::new();

        let err = GameRepository::delete(&store, &GameId::new()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::GameNotFound);
    }

    #[tokio::test]
    async fn active_games_exclude_finished_and_foreign() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");

        let open = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        let foreign = Game::new(GameId::new(), *bob.id(), *carol.id()).unwrap();
        let mut won = Game::new(GameId::new(), *alice.id(), *carol.id()).unwrap();
        for (i, cell) in [0, 1, 4, 2, 8].into_iter().enumerate() {
            let actor = if i % 2 == 0 { alice.id() } else { carol.id() };
            won.apply_move(actor, cell).unwrap();
        }
        for game in [&open, &foreign, &won] {
            GameRepository::save(&store, game).await.unwrap();
        }

        let active = store.find_active_by_player(alice.id()).await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), open.id());
        assert_eq!(store.find_in_progress().await.unwrap().len(), 2);
    }

    /// Saves a game between the two users with X one move from winning,
    /// then returns the stored copy and the won game.
    async fn game_before_win(store: &InMemoryStore, x: &User, o: &User) -> (Game, Game) {
        let mut game = Game::new(GameId::new(), *x.id(), *o.id()).unwrap();
        for (i, cell) in [0, 3, 1, 4].into_iter().enumerate() {
            let actor = if i % 2 == 0 { x.id() } else { o.id() };
            game.apply_move(actor, cell).unwrap();
        }
        GameRepository::save(store, &game).await.unwrap();
        let mut won = game.clone();
        won.apply_move(x.id(), 2).unwrap();
        (game, won)
    }

    async fn stored_user(store: &InMemoryStore, user: &User) -> User {
        UserRepository::find_by_id(store, user.id())
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn update_rejects_a_second_move_on_the_same_snapshot() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        let game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        GameRepository::save(&store, &game).await.unwrap();

        let mut first = game.clone();
        first.apply_move(alice.id(), 0).unwrap();
        let mut second = game.clone();
        second.apply_move(alice.id(), 1).unwrap();

        GameRepository::update(&store, &first).await.unwrap();
        let err = GameRepository::update(&store, &second).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::GameConflict);
        let stored = GameRepository::find_by_id(&store, game.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn update_missing_game_is_not_found() {
        let store = InMemoryStore::new();
        let x = UserId::new();
        let mut game = Game::new(GameId::new(), x, UserId::new()).unwrap();
        game.apply_move(&x, 4).unwrap();

        let err = GameRepository::update(&store, &game).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::GameNotFound);
    }

    #[tokio::test]
    async fn record_win_writes_nothing_when_a_user_is_missing() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        UserRepository::save(&store, &alice).await.unwrap();
        let (before, won) = game_before_win(&store, &alice, &bob).await;
        let score = Score::new(*won.id(), *alice.id(), *bob.id());

        let err = store.record_win(&won, &score).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
        assert!(store.find_by_user(alice.id()).await.unwrap().is_empty());
        assert_eq!(stored_user(&store, &alice).await.wins(), 0);
        let stored = GameRepository::find_by_id(&store, won.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, before);
    }

    #[tokio::test]
    async fn record_win_commits_score_and_tallies() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        UserRepository::save(&store, &alice).await.unwrap();
        UserRepository::save(&store, &bob).await.unwrap();
        let (_, won) = game_before_win(&store, &alice, &bob).await;

        let score = Score::new(*won.id(), *alice.id(), *bob.id());
        store.record_win(&won, &score).await.unwrap();

        let winner = stored_user(&store, &alice).await;
        let loser = stored_user(&store, &bob).await;
        assert_eq!((winner.wins(), winner.total_matches()), (1, 1));
        assert_eq!((loser.wins(), loser.total_matches()), (0, 1));
        assert_eq!(store.find_by_user(bob.id()).await.unwrap(), vec![score]);
    }

    #[tokio::test]
    async fn wins_from_one_user_snapshot_both_count() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        for u in [&alice, &bob, &carol] {
            UserRepository::save(&store, u).await.unwrap();
        }
        let (_, against_bob) = game_before_win(&store, &alice, &bob).await;
        let (_, against_carol) = game_before_win(&store, &alice, &carol).await;

        let first = Score::new(*against_bob.id(), *alice.id(), *bob.id());
        let second = Score::new(*against_carol.id(), *alice.id(), *carol.id());
        let (a, b) = tokio::join!(
            store.record_win(&against_bob, &first),
            store.record_win(&against_carol, &second)
        );
        a.unwrap();
        b.unwrap();

        let alice = stored_user(&store, &alice).await;
        assert_eq!((alice.wins(), alice.total_matches()), (2, 2));
    }

    #[tokio::test]
    async fn record_win_rejects_a_game_already_finished() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        UserRepository::save(&store, &alice).await.unwrap();
        UserRepository::save(&store, &bob).await.unwrap();
        let (_, won) = game_before_win(&store, &alice, &bob).await;
        let score = Score::new(*won.id(), *alice.id(), *bob.id());
        store.record_win(&won, &score).await.unwrap();

        let replay = Score::new(*won.id(), *alice.id(), *bob.id());
        let err = store.record_win(&won, &replay).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::GameConflict);
        assert_eq!(stored_user(&store, &alice).await.wins(), 1);
        assert_eq!(store.find_by_user(alice.id()).await.unwrap().len(), 1);
    }
}
