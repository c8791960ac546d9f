//! In-process `RecencyCache` with Redis rank semantics.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RankOrder, RecencyCache, RecencyCacheError, ScoredMember, StoreKey};

#[derive(Debug, Default)]
struct CacheState {
    sorted_sets: HashMap<String, HashMap<String, f64>>,
    hashes: HashMap<String, HashMap<String, String>>,
}

/// Sorted sets and hashes held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRecencyCache {
    state: Mutex<CacheState>,
}

impl InMemoryRecencyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CacheState>, RecencyCacheError> {
        self.state
            .lock()
            .map_err(|_| RecencyCacheError::backend("in-memory cache lock poisoned"))
    }
}

/// Resolve Redis-style inclusive ranks against a collection of `len` items.
fn rank_window(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = i64::try_from(len).ok()?;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };
    if len == 0 || start > stop || start >= len || stop < 0 {
        return None;
    }
    Some((usize::try_from(start).ok()?, usize::try_from(stop).ok()?))
}

fn by_score_then_member(a: &ScoredMember, b: &ScoredMember) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.member.cmp(&b.member))
}

#[async_trait]
impl RecencyCache for InMemoryRecencyCache {
    async fn add(&self, set: &StoreKey, member: &str, score: f64) -> Result<(), RecencyCacheError> {
        self.lock()?
            .sorted_sets
            .entry(set.as_str().to_owned())
            .or_default()
            .insert(member.to_owned(), score);
        Ok(())
    }

    async fn range_by_rank(
        &self,
        set: &StoreKey,
        start: i64,
        stop: i64,
        order: RankOrder,
    ) -> Result<Vec<ScoredMember>, RecencyCacheError> {
        let mut members: Vec<ScoredMember> = match self.lock()?.sorted_sets.get(set.as_str()) {
            Some(entries) => entries
                .iter()
                .map(|(member, score)| ScoredMember::new(member.as_str(), *score))
                .collect(),
            None => return Ok(Vec::new()),
        };
        members.sort_by(by_score_then_member);
        if order == RankOrder::Descending {
            members.reverse();
        }
        let Some((first, last)) = rank_window(members.len(), start, stop) else {
            return Ok(Vec::new());
        };
        members.truncate(last + 1);
        Ok(members.split_off(first))
    }

    async fn set(&self, map: &StoreKey, field: &str, value: &str) -> Result<(), RecencyCacheError> {
        self.lock()?
            .hashes
            .entry(map.as_str().to_owned())
            .or_default()
            .insert(field.to_owned(), value.to_owned());
        Ok(())
    }

    async fn get(&self, map: &StoreKey, field: &str) -> Result<Option<String>, RecencyCacheError> {
        Ok(self
            .lock()?
            .hashes
            .get(map.as_str())
            .and_then(|fields| fields.get(field))
            .cloned())
    }

    async fn exists(&self, map: &StoreKey, field: &str) -> Result<bool, RecencyCacheError> {
        Ok(self
            .lock()?
            .hashes
            .get(map.as_str())
            .is_some_and(|fields| fields.contains_key(field)))
    }
}
