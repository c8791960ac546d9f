//! Driving port for news read operations.

use async_trait::async_trait;

use crate::domain::{Error, News, NewsId};

/// Driving port for news read operations.
///
/// Listing and paging read the recency cache in ascending score order;
/// title search reads the search index. "No matches" is never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsQuery: Send + Sync {
    /// Every cached record, oldest first.
    async fn get_all(&self) -> Result<Vec<News>, Error>;

    /// The `page_size` oldest records. Non-positive sizes yield nothing.
    async fn get_page(&self, page_size: i64) -> Result<Vec<News>, Error>;

    /// The cached record for `id`, if any.
    async fn get_by_id(&self, id: NewsId) -> Result<Option<News>, Error>;

    /// Up to three records whose title fuzzily matches `title`.
    async fn search_by_title(&self, title: &str) -> Result<Vec<News>, Error>;
}

/// Fixture query backed by nothing; every read comes back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNewsQuery;

#[async_trait]
impl NewsQuery for FixtureNewsQuery {
    async fn get_all(&self) -> Result<Vec<News>, Error> {
        Ok(Vec::new())
    }

    async fn get_page(&self, _page_size: i64) -> Result<Vec<News>, Error> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: NewsId) -> Result<Option<News>, Error> {
        Ok(None)
    }

    async fn search_by_title(&self, _title: &str) -> Result<Vec<News>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_query_is_empty() {
        let query = FixtureNewsQuery;
        assert!(query.get_all().await.expect("get_all").is_empty());
        assert!(query.get_page(10).await.expect("get_page").is_empty());
        assert!(query.get_by_id(NewsId::new(1)).await.expect("get_by_id").is_none());
        assert!(query.search_by_title("x").await.expect("search").is_empty());
    }
}
