//! In-process `SearchIndex` with fuzzy term matching.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::fuzzy;
use crate::domain::ports::{FuzzyQuery, SearchIndex, SearchIndexError, StoreKey};
use crate::domain::{News, NewsId};

/// Documents per index, kept in first-insertion order.
#[derive(Debug, Default)]
pub struct InMemorySearchIndex {
    indices: Mutex<HashMap<String, Vec<News>>>,
}

impl InMemorySearchIndex {
    /// Create an empty index set.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<News>>>, SearchIndexError> {
        self.indices
            .lock()
            .map_err(|_| SearchIndexError::backend("in-memory index lock poisoned"))
    }
}

fn field_text<'a>(document: &'a News, field: &str) -> Option<&'a str> {
    match field {
        "title" => Some(document.title.as_str()),
        "description" => document.description.as_deref(),
        "body" => document.body.as_deref(),
        "tags" => document.tags.as_deref(),
        _ => None,
    }
}

#[async_trait]
impl SearchIndex for InMemorySearchIndex {
    async fn upsert(&self, index: &StoreKey, id: NewsId, document: &News) -> Result<(), SearchIndexError> {
        let mut indices = self.lock()?;
        let documents = indices.entry(index.as_str().to_owned()).or_default();
        let mut stored = document.clone();
        stored.id = id;
        match documents.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = stored,
            None => documents.push(stored),
        }
        Ok(())
    }

    async fn get_by_id(&self, index: &StoreKey, id: NewsId) -> Result<Option<News>, SearchIndexError> {
        Ok(self
            .lock()?
            .get(index.as_str())
            .and_then(|documents| documents.iter().find(|document| document.id == id))
            .cloned())
    }

    async fn fuzzy_search(&self, index: &StoreKey, query: &FuzzyQuery) -> Result<Vec<News>, SearchIndexError> {
        let indices = self.lock()?;
        let Some(documents) = indices.get(index.as_str()) else {
            return Ok(Vec::new());
        };
        if query.is_blank() {
            return Ok(documents
                .iter()
                .skip(query.from)
                .take(query.size)
                .cloned()
                .collect());
        }

        let terms = fuzzy::tokenize(&query.text);
        let mut hits: Vec<(f64, &News)> = documents
            .iter()
            .filter_map(|document| {
                let text = field_text(document, &query.field)?;
                fuzzy::score(&terms, text).map(|score| (score, document))
            })
            .collect();
        // Stable sort keeps insertion order among equal scores.
        hits.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(hits
            .into_iter()
            .skip(query.from)
            .take(query.size)
            .map(|(_, document)| document.clone())
            .collect())
    }
}
