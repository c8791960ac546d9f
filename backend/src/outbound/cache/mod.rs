//! Redis-backed recency cache adapter.
//!
//! Commands go through a `bb8-redis` pool. Each call is bounded by a command
//! timeout covering both pool checkout and the round trip.

mod redis_cache;

pub use redis_cache::{RedisCacheConfig, RedisRecencyCache};
