//! Builds the HTTP state from settings: seed snapshot, adapters, services.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use thiserror::Error;
use tracing::info;
use url::Url;

use news_backend::domain::ports::{
    NewsSourceError, RecencyCache, RecencyCacheError, SearchIndex, StoreKeyValidationError,
    StoreKeys,
};
use news_backend::domain::{NewsQueryService, NewsSnapshot, NewsSyncService};
use news_backend::inbound::http::state::HttpState;
use news_backend::outbound::cache::{RedisCacheConfig, RedisRecencyCache};
use news_backend::outbound::memory::{InMemoryRecencyCache, InMemorySearchIndex};
use news_backend::outbound::search::ElasticsearchIndex;
use news_backend::outbound::seed::JsonFileNewsSource;
use news_backend::settings::NewsSettings;

/// Fatal errors raised before the server starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A configured store name is invalid.
    #[error("invalid store name: {0}")]
    StoreKey(#[from] StoreKeyValidationError),
    /// The seed snapshot could not be loaded.
    #[error("seed snapshot could not be loaded: {0}")]
    Seed(#[from] NewsSourceError),
    /// The Redis pool could not be built.
    #[error("recency cache could not be initialised: {0}")]
    Cache(#[from] RecencyCacheError),
    /// The Elasticsearch URL is malformed.
    #[error("invalid Elasticsearch URL {url}: {source}")]
    SearchUrl {
        /// Configured URL.
        url: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client for Elasticsearch could not be built.
    #[error("search client could not be initialised: {0}")]
    SearchClient(#[from] reqwest::Error),
}

fn wire<C, I>(
    cache: Arc<C>,
    index: Arc<I>,
    snapshot: NewsSnapshot,
    keys: StoreKeys,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    C: RecencyCache + 'static,
    I: SearchIndex + 'static,
{
    let sync = NewsSyncService::new(cache, index, snapshot, keys, clock);
    let query = NewsQueryService::new(sync.clone());
    HttpState::new(Arc::new(sync), Arc::new(query))
}

/// Load the seed snapshot and build adapters and services.
///
/// # Errors
/// Returns [`StartupError`] when the snapshot, a store name or an adapter
/// cannot be set up.
pub async fn build_http_state(settings: &NewsSettings) -> Result<HttpState, StartupError> {
    let keys = settings.store_keys()?;
    let source = JsonFileNewsSource::new(settings.seed_path());
    let snapshot = NewsSnapshot::load(&source).await?;
    info!(
        path = %source.path().display(),
        records = snapshot.len(),
        "seed snapshot loaded"
    );
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    if settings.in_memory {
        info!("using in-process stores");
        return Ok(wire(
            Arc::new(InMemoryRecencyCache::new()),
            Arc::new(InMemorySearchIndex::new()),
            snapshot,
            keys,
            clock,
        ));
    }

    let cache = RedisRecencyCache::connect(
        RedisCacheConfig::new(settings.redis_url()).with_command_timeout(settings.store_timeout()),
    )
    .await?;
    let search_url = settings.elasticsearch_url();
    let base = Url::parse(search_url).map_err(|source| StartupError::SearchUrl {
        url: search_url.to_owned(),
        source,
    })?;
    let index = ElasticsearchIndex::new(base, settings.store_timeout())?;
    info!(
        redis = settings.redis_url(),
        elasticsearch = search_url,
        "using external stores"
    );
    Ok(wire(Arc::new(cache), Arc::new(index), snapshot, keys, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use news_backend::domain::NewsId;
    use tempfile::TempDir;

    fn settings_for(seed_path: std::path::PathBuf) -> NewsSettings {
        NewsSettings {
            redis_url: None,
            elasticsearch_url: None,
            seed_path: Some(seed_path),
            bind_addr: None,
            store_timeout_ms: None,
            sorted_set_key: None,
            hash_key: None,
            index_name: None,
            in_memory: true,
        }
    }

    #[tokio::test]
    async fn in_memory_state_serves_seed_records_after_reconciliation() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("news.json");
        let mut file = std::fs::File::create(&path).expect("create seed");
        file.write_all(br#"[{"Id": 1, "Title": "Alpha", "TimeUnix": 100}]"#)
            .expect("write seed");

        let state = build_http_state(&settings_for(path)).await.expect("state builds");

        let all = state.news_query.get_all().await.expect("listing");
        assert_eq!(all.len(), 1);
        assert!(
            state
                .news_query
                .get_by_id(NewsId::new(1))
                .await
                .expect("lookup")
                .is_some()
        );
    }

    #[tokio::test]
    async fn missing_seed_file_is_fatal() {
        let dir = TempDir::new().expect("temp dir");
        let result = build_http_state(&settings_for(dir.path().join("absent.json"))).await;
        assert!(matches!(result, Err(StartupError::Seed(_))));
    }
}
