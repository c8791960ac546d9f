//! Port interface for the recency cache.
//!
//! The cache exposes two primitives addressed by [`StoreKey`]: a sorted set
//! of record identifiers scored by publication time, and a hash map from
//! identifier to serialised record. Every call is a network round trip and
//! may fail or time out independently of the others.
use async_trait::async_trait;

use super::{StoreKey, define_port_error};

define_port_error! {
    /// Errors surfaced by recency cache adapters.
    pub enum RecencyCacheError (store = "recency_cache") {
        /// Cache backend is unavailable or rejected the command.
        Backend { message: String } => "recency cache backend failure: {message}",
        /// The command did not complete within the configured bound.
        Timeout { message: String } => "recency cache timed out: {message}",
    }
}

/// Direction of a rank scan over a sorted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Lowest score first.
    Ascending,
    /// Highest score first.
    Descending,
}

/// A sorted-set member with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: String,
    pub score: f64,
}

impl ScoredMember {
    /// Pair a member with its score.
    pub fn new(member: impl Into<String>, score: f64) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

/// Sorted-set and hash-map primitives backing the recency read path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecencyCache: Send + Sync {
    /// Add `member` to `set` with `score`, updating the score when the
    /// member already exists.
    async fn add(&self, set: &StoreKey, member: &str, score: f64) -> Result<(), RecencyCacheError>;

    /// Return members whose rank lies in `start..=stop` for the given order.
    ///
    /// Ranks follow Redis conventions: zero-based, negative values count from
    /// the end (`-1` is the last member), and out-of-range bounds are clamped.
    async fn range_by_rank(
        &self,
        set: &StoreKey,
        start: i64,
        stop: i64,
        order: RankOrder,
    ) -> Result<Vec<ScoredMember>, RecencyCacheError>;

    /// Set `field` to `value` in hash `map`.
    async fn set(&self, map: &StoreKey, field: &str, value: &str) -> Result<(), RecencyCacheError>;

    /// Read `field` from hash `map`.
    async fn get(&self, map: &StoreKey, field: &str) -> Result<Option<String>, RecencyCacheError>;

    /// Whether `field` is present in hash `map`.
    async fn exists(&self, map: &StoreKey, field: &str) -> Result<bool, RecencyCacheError>;
}
