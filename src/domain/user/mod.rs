//! User domain module.
//!
//! Registered players, their unique names, and the win/match tallies
//! used for rankings.

mod account;
mod errors;

pub use account::{User, MAX_NAME_LENGTH};
pub use errors::UserError;
