//! In-memory adapters.
//!
//! - `InMemoryStore` - users, games and scores in one shared table set

mod store;

pub use store::InMemoryStore;
