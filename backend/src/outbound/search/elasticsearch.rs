//! Reqwest-backed Elasticsearch index adapter.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, timeout and HTTP error mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{GetResponseDto, SearchRequestDto, SearchResponseDto};
use crate::domain::ports::{FuzzyQuery, SearchIndex, SearchIndexError, StoreKey};
use crate::domain::{News, NewsId};

/// Search index adapter speaking the Elasticsearch REST API.
#[derive(Clone)]
pub struct ElasticsearchIndex {
    client: Client,
    base: Url,
}

impl ElasticsearchIndex {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchIndexError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                SearchIndexError::backend(format!("{} cannot be used as a base URL", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl SearchIndex for ElasticsearchIndex {
    async fn upsert(&self, index: &StoreKey, id: NewsId, document: &News) -> Result<(), SearchIndexError> {
        let mut url = self.endpoint(&[index.as_str(), "_doc", &id.to_string()])?;
        url.query_pairs_mut().append_pair("refresh", "true");
        let response = self
            .client
            .put(url)
            .json(document)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }

    async fn get_by_id(&self, index: &StoreKey, id: NewsId) -> Result<Option<News>, SearchIndexError> {
        let url = self.endpoint(&[index.as_str(), "_doc", &id.to_string()])?;
        let response = self.client.get(url).send().await.map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_document(body.as_ref())
    }

    async fn fuzzy_search(&self, index: &StoreKey, query: &FuzzyQuery) -> Result<Vec<News>, SearchIndexError> {
        let url = self.endpoint(&[index.as_str(), "_search"])?;
        let response = self
            .client
            .post(url)
            .json(&SearchRequestDto::from_query(query))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        // An index that has never been written to has no documents to match.
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_hits(body.as_ref())
    }
}

fn parse_document(body: &[u8]) -> Result<Option<News>, SearchIndexError> {
    let decoded: GetResponseDto = serde_json::from_slice(body).map_err(|error| {
        SearchIndexError::decode(format!("invalid document payload: {error}"))
    })?;
    Ok(decoded.into_document())
}

fn parse_hits(body: &[u8]) -> Result<Vec<News>, SearchIndexError> {
    let decoded: SearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        SearchIndexError::decode(format!("invalid search payload: {error}"))
    })?;
    Ok(decoded.into_documents())
}

fn map_transport_error(error: reqwest::Error) -> SearchIndexError {
    if error.is_timeout() {
        SearchIndexError::timeout(error.to_string())
    } else {
        SearchIndexError::backend(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SearchIndexError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => SearchIndexError::timeout(message),
        _ => SearchIndexError::backend(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
