//! GameView - caller-facing projection of a game with player names resolved.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::game::Game;
use crate::ports::UserRepository;

/// A game as callers see it: names instead of user IDs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    /// The game key callers use to address this game.
    pub key: String,
    /// Nine cells, row-major: `""`, `"X"` or `"O"`.
    pub board: Vec<String>,
    pub player_x: String,
    pub player_o: String,
    pub next_move: String,
    pub is_game_over: bool,
    /// Winner's name, or empty while there is none.
    pub winner: String,
}

impl GameView {
    /// Builds the view, looking up both players by ID.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if a seat refers to a user that no longer exists
    pub async fn resolve(game: &Game, users: &dyn UserRepository) -> Result<Self, DomainError> {
        let player_x = name_of(users, game.player_x()).await?;
        let player_o = name_of(users, game.player_o()).await?;

        let seat_name = |id: &UserId| {
            if id == game.player_x() {
                player_x.clone()
            } else {
                player_o.clone()
            }
        };

        Ok(Self {
            key: game.id().to_string(),
            board: game
                .board()
                .cells()
                .iter()
                .map(|cell| cell.as_str().to_string())
                .collect(),
            next_move: seat_name(game.next_to_move()),
            winner: game.winner().map(seat_name).unwrap_or_default(),
            is_game_over: game.is_over(),
            player_x,
            player_o,
        })
    }
}

async fn name_of(users: &dyn UserRepository, id: &UserId) -> Result<String, DomainError> {
    users
        .find_by_id(id)
        .await?
        .map(|user| user.name().to_string())
        .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockStore;
    use crate::domain::foundation::GameId;

    #[tokio::test]
    async fn resolves_names_for_both_seats() {
        let store = MockStore::new();
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();

        let view = GameView::resolve(&game, &store).await.unwrap();

        assert_eq!(view.player_x, "alice");
        assert_eq!(view.player_o, "bob");
        assert_eq!(view.next_move, "alice");
        assert_eq!(view.winner, "");
        assert_eq!(view.board, vec![String::new(); 9]);
        assert!(!view.is_game_over);
    }

    #[tokio::test]
    async fn reports_winner_name() {
        let store = MockStore::new();
        let alice = store.seed_user("alice");
        let bob = store.seed_user("bob");
        let mut game = Game::new(GameId::new(), *alice.id(), *bob.id()).unwrap();
        for (actor, cell) in [(&alice, 0), (&bob, 1), (&alice, 4), (&bob, 2), (&alice, 8)] {
            game.apply_move(actor.id(), cell).unwrap();
        }

        let view = GameView::resolve(&game, &store).await.unwrap();

        assert_eq!(view.winner, "alice");
        assert!(view.is_game_over);
        assert_eq!(view.board[4], "X");
        assert_eq!(view.board[1], "O");
    }

    #[tokio::test]
    async fn missing_player_is_user_not_found() {
        let store = MockStore::new();
        let alice = store.seed_user("alice");
        let game = Game::new(GameId::new(), *alice.id(), UserId::new()).unwrap();

        let err = GameView::resolve(&game, &store).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
