//! Aggregate cache adapters.
//!
//! - `InMemoryCache` - process-local map for single-instance runs and tests
//! - `RedisCache` - shared cache for multi-instance deployments

mod in_memory;
mod redis;

pub use in_memory::InMemoryCache;
pub use self::redis::RedisCache;
