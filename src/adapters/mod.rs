//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` / `postgres` - persistence for users, games and scores
//! - `cache` - aggregate cache (in-memory, Redis)
//! - `email` - mail delivery (Resend, logging fallback)
//! - `tasks` - background task dispatch on the Tokio runtime
//! - `jobs` - periodic reminder and statistics jobs
//! - `http` - REST API

pub mod cache;
pub mod email;
pub mod http;
pub mod jobs;
pub mod memory;
pub mod postgres;
pub mod tasks;

pub use cache::{InMemoryCache, RedisCache};
pub use email::{LoggingMailer, ResendConfig, ResendMailer};
pub use jobs::{JobScheduler, JobSchedulerConfig};
pub use memory::InMemoryStore;
pub use tasks::TokioTaskDispatcher;
