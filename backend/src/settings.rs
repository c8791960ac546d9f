//! Service configuration loaded via OrthoConfig.
//!
//! Every value is optional; accessors fall back to local-development
//! defaults. Environment variables use the `NEWS_` prefix, for example
//! `NEWS_REDIS_URL` or `NEWS_STORE_TIMEOUT_MS`.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::{StoreKey, StoreKeyValidationError, StoreKeys};

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_ELASTICSEARCH_URL: &str = "http://127.0.0.1:9200";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_STORE_TIMEOUT_MS: u64 = 2_000;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("news.json")
}

/// Configuration values for the news service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWS")]
pub struct NewsSettings {
    /// Redis connection URL.
    pub redis_url: Option<String>,
    /// Elasticsearch base URL.
    pub elasticsearch_url: Option<String>,
    /// Path of the JSON seed snapshot.
    pub seed_path: Option<PathBuf>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Upper bound for a single store call, in milliseconds.
    pub store_timeout_ms: Option<u64>,
    /// Name of the recency sorted set.
    pub sorted_set_key: Option<String>,
    /// Name of the record hash map.
    pub hash_key: Option<String>,
    /// Name of the search index.
    pub index_name: Option<String>,
    /// Use in-process stores instead of Redis and Elasticsearch.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl NewsSettings {
    /// Return the Redis URL, falling back to a local instance.
    pub fn redis_url(&self) -> &str {
        self.redis_url.as_deref().unwrap_or(DEFAULT_REDIS_URL)
    }

    /// Return the Elasticsearch URL, falling back to a local instance.
    pub fn elasticsearch_url(&self) -> &str {
        self.elasticsearch_url
            .as_deref()
            .unwrap_or(DEFAULT_ELASTICSEARCH_URL)
    }

    /// Return the seed path, falling back to the bundled fixture.
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path.clone().unwrap_or_else(default_seed_path)
    }

    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_BIND_PORT,
        )))
    }

    /// Return the per-call store timeout.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms.unwrap_or(DEFAULT_STORE_TIMEOUT_MS).max(1))
    }

    /// Return the validated store names, using defaults for unset values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreKeyValidationError`] when a configured name is blank or
    /// contains whitespace.
    pub fn store_keys(&self) -> Result<StoreKeys, StoreKeyValidationError> {
        let defaults = StoreKeys::default();
        Ok(StoreKeys {
            sorted_set: override_key(self.sorted_set_key.as_deref(), defaults.sorted_set)?,
            hash: override_key(self.hash_key.as_deref(), defaults.hash)?,
            index: override_key(self.index_name.as_deref(), defaults.index)?,
        })
    }
}

fn override_key(
    configured: Option<&str>,
    fallback: StoreKey,
) -> Result<StoreKey, StoreKeyValidationError> {
    configured.map_or(Ok(fallback), StoreKey::new)
}
