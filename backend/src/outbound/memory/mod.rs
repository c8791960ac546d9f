//! In-process adapters for local runs and end-to-end tests.
//!
//! They follow the same observable semantics as the Redis and Elasticsearch
//! adapters: Redis rank rules for the sorted set, and fuzzy title matching
//! with automatic edit distance for the index. State lives behind a
//! `std::sync::Mutex` that is never held across an `.await`.

mod fuzzy;
mod recency_cache;
mod search_index;

pub use recency_cache::InMemoryRecencyCache;
pub use search_index::InMemorySearchIndex;
