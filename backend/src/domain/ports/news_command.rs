//! Driving port for news write operations.
//!
//! Inbound adapters use this port to insert records without knowing how the
//! write is fanned out to the recency cache and the search index.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, News, NewsId};

/// Tally of one reconciliation pass over the seed snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Snapshot records inspected.
    pub examined: usize,
    /// Records found missing from a store and written again.
    pub repaired: usize,
    /// Records already present in both stores.
    pub skipped: usize,
    /// Records whose check or repair failed; they stay pending.
    pub failed: usize,
}

/// Acknowledgement for an accepted insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub id: NewsId,
    /// Recency score the record was written with.
    pub unix_seconds: i64,
    pub reconciliation: ReconciliationReport,
}

/// Driving port for news write operations.
///
/// # Examples
///
/// ```rust,no_run
/// use news_backend::domain::ports::{FixtureNewsCommand, NewsCommand};
/// use news_backend::domain::{News, NewsId};
///
/// # async fn example() -> Result<(), news_backend::domain::Error> {
/// let outcome = FixtureNewsCommand
///     .insert(News::new(NewsId::new(1), "Alpha").with_unix_seconds(100))
///     .await?;
/// assert_eq!(outcome.unix_seconds, 100);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsCommand: Send + Sync {
    /// Write one record to both stores, then repair any snapshot record
    /// still missing from either.
    ///
    /// Fails only when the requested record itself could not be written.
    async fn insert(&self, news: News) -> Result<InsertOutcome, Error>;
}

/// Fixture command that accepts every record without writing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNewsCommand;

#[async_trait]
impl NewsCommand for FixtureNewsCommand {
    async fn insert(&self, news: News) -> Result<InsertOutcome, Error> {
        Ok(InsertOutcome {
            id: news.id,
            unix_seconds: news.unix_seconds,
            reconciliation: ReconciliationReport::default(),
        })
    }
}
