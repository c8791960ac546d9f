//! Read path over the recency cache and the search index.

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{
    FuzzyQuery, NewsQuery, RankOrder, RecencyCache, RecencyCacheError, ScoredMember, SearchIndex,
    SearchIndexError,
};
use crate::domain::{Error, News, NewsId, NewsSyncService};

/// Document field title searches run against.
pub const TITLE_FIELD: &str = "title";
/// Maximum number of hits a title search returns.
pub const TITLE_SEARCH_LIMIT: usize = 3;

/// Query service implementing [`NewsQuery`].
///
/// Listing everything first runs a reconciliation pass through the wrapped
/// synchroniser so missing snapshot records reappear.
pub struct NewsQueryService<C, I> {
    sync: NewsSyncService<C, I>,
}

impl<C, I> Clone for NewsQueryService<C, I> {
    fn clone(&self) -> Self {
        Self {
            sync: self.sync.clone(),
        }
    }
}

impl<C, I> NewsQueryService<C, I> {
    /// Create a query service sharing the synchroniser's stores.
    pub fn new(sync: NewsSyncService<C, I>) -> Self {
        Self { sync }
    }
}

impl<C, I> NewsQueryService<C, I>
where
    C: RecencyCache,
    I: SearchIndex,
{
    async fn read_range(&self, start: i64, stop: i64) -> Result<Vec<News>, Error> {
        let members = self
            .sync
            .cache()
            .range_by_rank(&self.sync.keys().sorted_set, start, stop, RankOrder::Ascending)
            .await
            .map_err(map_cache_error)?;
        Ok(self.resolve(members).await)
    }

    // Entries that are missing from the hash or fail to decode are skipped.
    async fn resolve(&self, members: Vec<ScoredMember>) -> Vec<News> {
        let mut records = Vec::with_capacity(members.len());
        for ScoredMember { member, .. } in members {
            match self.sync.cache().get(&self.sync.keys().hash, &member).await {
                Ok(Some(value)) => match News::from_cache_value(&value) {
                    Ok(news) => records.push(news),
                    Err(error) => {
                        warn!(member = %member, error = %error, "skipping undecodable cache entry");
                    }
                },
                Ok(None) => {
                    warn!(member = %member, "skipping sorted set member missing from hash");
                }
                Err(error) => {
                    warn!(
                        member = %member,
                        store = RecencyCacheError::STORE,
                        error = %error,
                        "skipping unreadable cache entry"
                    );
                }
            }
        }
        records
    }
}

#[async_trait]
impl<C, I> NewsQuery for NewsQueryService<C, I>
where
    C: RecencyCache,
    I: SearchIndex,
{
    async fn get_all(&self) -> Result<Vec<News>, Error> {
        self.sync.reconcile().await;
        self.read_range(0, -1).await
    }

    async fn get_page(&self, page_size: i64) -> Result<Vec<News>, Error> {
        if page_size <= 0 {
            return Ok(Vec::new());
        }
        self.read_range(0, page_size - 1).await
    }

    async fn get_by_id(&self, id: NewsId) -> Result<Option<News>, Error> {
        let value = self
            .sync
            .cache()
            .get(&self.sync.keys().hash, &id.to_string())
            .await
            .map_err(map_cache_error)?;
        value
            .map(|raw| {
                News::from_cache_value(&raw).map_err(|error| {
                    Error::internal(format!("cached news {id} could not be decoded: {error}"))
                })
            })
            .transpose()
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<News>, Error> {
        let query = FuzzyQuery::new(TITLE_FIELD, title.trim(), TITLE_SEARCH_LIMIT);
        let mut hits = self
            .sync
            .index()
            .fuzzy_search(&self.sync.keys().index, &query)
            .await
            .map_err(map_index_error)?;
        hits.truncate(TITLE_SEARCH_LIMIT);
        Ok(hits)
    }
}

fn map_cache_error(error: RecencyCacheError) -> Error {
    Error::service_unavailable(error.to_string())
        .with_details(json!({ "store": RecencyCacheError::STORE }))
}

fn map_index_error(error: SearchIndexError) -> Error {
    match error {
        SearchIndexError::Decode { .. } => Error::internal(error.to_string()),
        _ => Error::service_unavailable(error.to_string())
            .with_details(json!({ "store": SearchIndexError::STORE })),
    }
}

#[cfg(test)]
#[path = "news_query_tests.rs"]
mod tests;
