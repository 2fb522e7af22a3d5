//! Aggregate cache port.
//!
//! A string-keyed store for precomputed values such as the average-moves
//! announcement. Entries are recomputed periodically by a background job.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Port for a shared key/value cache.
#[async_trait]
pub trait AggregateCache: Send + Sync {
    /// Returns the cached value, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Removes a value. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
