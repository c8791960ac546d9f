//! Port interface for the full-text search index.
//!
//! Documents are [`News`] records keyed by their identifier. Upserts must be
//! visible to queries by the time the call returns.
use async_trait::async_trait;

use super::{StoreKey, define_port_error};
use crate::domain::{News, NewsId};

define_port_error! {
    /// Errors surfaced by search index adapters.
    pub enum SearchIndexError (store = "search_index") {
        /// Index backend is unavailable or rejected the request.
        Backend { message: String } => "search index backend failure: {message}",
        /// The request did not complete within the configured bound.
        Timeout { message: String } => "search index timed out: {message}",
        /// A response could not be decoded.
        Decode { message: String } => "search index response could not be decoded: {message}",
    }
}

/// A fuzzy match against one document field.
///
/// `size` and `from` window the relevance-ranked hits. A blank `text` asks
/// the index for its default ranking over all documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyQuery {
    pub field: String,
    pub text: String,
    pub size: usize,
    pub from: usize,
}

impl FuzzyQuery {
    /// Build a query over `field` returning at most `size` hits from offset 0.
    pub fn new(field: impl Into<String>, text: impl Into<String>, size: usize) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
            size,
            from: 0,
        }
    }

    /// Whether the query text has no searchable content.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Document store with identifier upserts and fuzzy text queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Insert or replace the document for `id`, refreshing the index before
    /// returning.
    async fn upsert(&self, index: &StoreKey, id: NewsId, document: &News) -> Result<(), SearchIndexError>;

    /// Fetch the document stored for `id`.
    async fn get_by_id(&self, index: &StoreKey, id: NewsId) -> Result<Option<News>, SearchIndexError>;

    /// Run a fuzzy query and return matching documents in relevance order.
    async fn fuzzy_search(&self, index: &StoreKey, query: &FuzzyQuery) -> Result<Vec<News>, SearchIndexError>;
}
