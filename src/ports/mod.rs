//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - User directory
//! - `GameRepository` - Game aggregates
//! - `ScoreRepository` - Recorded match results (read side)
//! - `MatchRecorder` - Atomic write of a won game with its score and tallies
//!
//! ## Side-Effect Ports
//!
//! - `TaskDispatcher` - Fire-and-forget background tasks
//! - `AggregateCache` - Shared cache for precomputed statistics
//! - `Mailer` - Outbound email

mod aggregate_cache;
mod game_repository;
mod mailer;
mod match_recorder;
mod score_repository;
mod task_dispatcher;
mod user_repository;

pub use aggregate_cache::{AggregateCache, CacheError};
pub use game_repository::GameRepository;
pub use mailer::{EmailMessage, Mailer, MailerError};
pub use match_recorder::MatchRecorder;
pub use score_repository::ScoreRepository;
pub use task_dispatcher::{DispatchError, Task, TaskDispatcher};
pub use user_repository::UserRepository;
