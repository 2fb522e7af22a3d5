//! Aggregate statistics over a snapshot of games.

use super::Game;

/// Mean number of moves left across the in-progress games of `games`.
///
/// Terminal games are ignored. Returns `None` when no game is in progress.
/// The caller supplies an owned snapshot, so concurrent writers never
/// affect a computation that is underway.
pub fn average_remaining_moves(games: &[Game]) -> Option<f64> {
    let remaining: Vec<usize> = games
        .iter()
        .filter(|game| game.status().is_in_progress())
        .map(|game| game.board().remaining_moves())
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let total: usize = remaining.iter().sum();
    Some(total as f64 / remaining.len() as f64)
}
