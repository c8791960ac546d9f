//! Write path: keeps the recency cache and the search index in step.
//!
//! Every write goes to the cache sorted set, then the cache hash, then the
//! search index. The stores are independent, so a write can stop part way;
//! the reconciliation pass re-writes snapshot records that either store is
//! missing. Reconciliation failures are logged and counted, never returned.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    InsertOutcome, NewsCommand, RecencyCache, RecencyCacheError, ReconciliationReport, SearchIndex,
    SearchIndexError, StoreKeys,
};
use crate::domain::{Error, News, NewsSnapshot};

/// Failure while writing one record to both stores.
#[derive(Debug, thiserror::Error)]
pub(crate) enum WriteError {
    #[error("record could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Cache(#[from] RecencyCacheError),
    #[error(transparent)]
    Index(#[from] SearchIndexError),
}

impl WriteError {
    fn store(&self) -> &'static str {
        match self {
            Self::Encode(_) => "codec",
            Self::Cache(_) => RecencyCacheError::STORE,
            Self::Index(_) => SearchIndexError::STORE,
        }
    }
}

impl From<WriteError> for Error {
    fn from(error: WriteError) -> Self {
        match &error {
            WriteError::Encode(_) => Error::internal(error.to_string()),
            WriteError::Cache(_) | WriteError::Index(_) => {
                Error::service_unavailable(error.to_string())
                    .with_details(json!({ "store": error.store() }))
            }
        }
    }
}

/// Synchroniser implementing [`NewsCommand`].
///
/// Cloning shares the adapters and the snapshot.
pub struct NewsSyncService<C, I> {
    cache: Arc<C>,
    index: Arc<I>,
    snapshot: NewsSnapshot,
    keys: StoreKeys,
    clock: Arc<dyn Clock>,
}

impl<C, I> Clone for NewsSyncService<C, I> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            index: Arc::clone(&self.index),
            snapshot: self.snapshot.clone(),
            keys: self.keys.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C, I> NewsSyncService<C, I> {
    /// Create a synchroniser over the given stores and startup snapshot.
    pub fn new(
        cache: Arc<C>,
        index: Arc<I>,
        snapshot: NewsSnapshot,
        keys: StoreKeys,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            index,
            snapshot,
            keys,
            clock,
        }
    }

    pub(crate) fn cache(&self) -> &C {
        &self.cache
    }

    pub(crate) fn index(&self) -> &I {
        &self.index
    }

    pub(crate) fn keys(&self) -> &StoreKeys {
        &self.keys
    }
}

impl<C, I> NewsSyncService<C, I>
where
    C: RecencyCache,
    I: SearchIndex,
{
    /// Write `news` to the sorted set, the hash and the index, in that order.
    ///
    /// Stops at the first failure; earlier writes are not rolled back.
    pub(crate) async fn write_record(&self, news: &News) -> Result<(), WriteError> {
        let member = news.id.to_string();
        let value = news.to_cache_value()?;
        self.cache
            .add(&self.keys.sorted_set, &member, news.recency_score())
            .await?;
        self.cache.set(&self.keys.hash, &member, &value).await?;
        self.index.upsert(&self.keys.index, news.id, news).await?;
        Ok(())
    }

    /// Re-write every snapshot record missing from the index or the hash.
    ///
    /// Records are visited sequentially in snapshot order.
    pub async fn reconcile(&self) -> ReconciliationReport {
        let mut report = ReconciliationReport::default();
        for record in self.snapshot.records() {
            report.examined += 1;
            match self.is_synchronised(record).await {
                Ok(true) => report.skipped += 1,
                Ok(false) => {
                    let record = record.clone().stamped(self.clock.utc());
                    match self.write_record(&record).await {
                        Ok(()) => {
                            debug!(news_id = %record.id, "repaired snapshot record");
                            report.repaired += 1;
                        }
                        Err(error) => {
                            warn!(
                                news_id = %record.id,
                                store = error.store(),
                                error = %error,
                                "snapshot record repair failed"
                            );
                            report.failed += 1;
                        }
                    }
                }
                Err(error) => {
                    warn!(
                        news_id = %record.id,
                        store = error.store(),
                        error = %error,
                        "snapshot record presence check failed"
                    );
                    report.failed += 1;
                }
            }
        }
        if report.repaired > 0 || report.failed > 0 {
            info!(
                examined = report.examined,
                repaired = report.repaired,
                skipped = report.skipped,
                failed = report.failed,
                "reconciliation pass finished"
            );
        }
        report
    }

    async fn is_synchronised(&self, record: &News) -> Result<bool, WriteError> {
        let indexed = self
            .index
            .get_by_id(&self.keys.index, record.id)
            .await?
            .is_some();
        if !indexed {
            return Ok(false);
        }
        let cached = self
            .cache
            .exists(&self.keys.hash, &record.id.to_string())
            .await?;
        Ok(cached)
    }
}

#[async_trait]
impl<C, I> NewsCommand for NewsSyncService<C, I>
where
    C: RecencyCache,
    I: SearchIndex,
{
    async fn insert(&self, news: News) -> Result<InsertOutcome, Error> {
        if news.title.trim().is_empty() {
            return Err(Error::invalid_request("title must not be empty"));
        }
        let news = news.stamped(self.clock.utc());
        self.write_record(&news).await.map_err(|error| {
            warn!(
                news_id = %news.id,
                store = error.store(),
                error = %error,
                "insert failed"
            );
            Error::from(error)
        })?;
        let reconciliation = self.reconcile().await;
        Ok(InsertOutcome {
            id: news.id,
            unix_seconds: news.unix_seconds,
            reconciliation,
        })
    }
}

#[cfg(test)]
#[path = "news_sync_tests.rs"]
mod tests;
