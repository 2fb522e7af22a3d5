//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `board` - The 3x3 board and its pure evaluation functions
//! - `game` - Game aggregate: the per-match state machine
//! - `user` - Registered players and their tallies
//! - `score` - Records of won matches

pub mod board;
pub mod foundation;
pub mod game;
pub mod score;
pub mod user;
