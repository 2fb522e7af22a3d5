//! GameStatus enum for tracking the lifecycle of a game.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a game.
///
/// `InProgress` is initial; `Won`, `Drawn` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Drawn,
    Cancelled,
}

impl GameStatus {
    /// Returns true while moves are still accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Drawn => "drawn",
            GameStatus::Cancelled => "cancelled",
        }
    }

    /// Parses the stored string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(GameStatus::InProgress),
            "won" => Some(GameStatus::Won),
            "drawn" => Some(GameStatus::Drawn),
            "cancelled" => Some(GameStatus::Cancelled),
            _ => None,
        }
    }
}

impl StateMachine for GameStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use GameStatus::*;
        match self {
            InProgress => vec![Won, Drawn, Cancelled],
            Won | Drawn | Cancelled => vec![],
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::InProgress => "In Progress",
            GameStatus::Won => "Won",
            GameStatus::Drawn => "Drawn",
            GameStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}
