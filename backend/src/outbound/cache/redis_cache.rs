//! `RecencyCache` over Redis sorted sets and hashes.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::bb8::{Pool, RunError};
use bb8_redis::redis::{self, RedisError};
use bb8_redis::RedisConnectionManager;

use crate::domain::ports::{RankOrder, RecencyCache, RecencyCacheError, ScoredMember, StoreKey};

/// Configuration for the Redis connection pool.
///
/// # Example
///
/// ```ignore
/// let config = RedisCacheConfig::new("redis://127.0.0.1:6379")
///     .with_max_size(8)
///     .with_command_timeout(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct RedisCacheConfig {
    url: String,
    max_size: u32,
    connection_timeout: Duration,
    command_timeout: Duration,
}

impl RedisCacheConfig {
    /// Create a configuration for `url`.
    ///
    /// Defaults: 10 pooled connections, 5 second checkout timeout, 2 second
    /// command timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
            command_timeout: Duration::from_secs(2),
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the pool checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set the upper bound for a single command, checkout included.
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Get the Redis URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Recency cache adapter backed by a pooled Redis connection.
#[derive(Clone)]
pub struct RedisRecencyCache {
    pool: Pool<RedisConnectionManager>,
    command_timeout: Duration,
}

impl RedisRecencyCache {
    /// Build the pool. No connection is opened until the first command.
    ///
    /// # Errors
    ///
    /// Returns `RecencyCacheError::Backend` when the URL is invalid or the
    /// pool cannot be constructed.
    pub async fn connect(config: RedisCacheConfig) -> Result<Self, RecencyCacheError> {
        let manager = RedisConnectionManager::new(config.url.as_str())
            .map_err(|error| RecencyCacheError::backend(format!("invalid Redis URL: {error}")))?;
        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|error| RecencyCacheError::backend(error.to_string()))?;
        Ok(Self {
            pool,
            command_timeout: config.command_timeout,
        })
    }

    async fn run<T, F, Fut>(&self, name: &'static str, command: F) -> Result<T, RecencyCacheError>
    where
        F: FnOnce(Pool<RedisConnectionManager>) -> Fut,
        Fut: Future<Output = Result<T, RecencyCacheError>>,
    {
        tokio::time::timeout(self.command_timeout, command(self.pool.clone()))
            .await
            .map_err(|_| {
                RecencyCacheError::timeout(format!(
                    "{name} exceeded {} ms",
                    self.command_timeout.as_millis()
                ))
            })?
    }
}

fn map_run_error(error: RunError<RedisError>) -> RecencyCacheError {
    match error {
        RunError::User(inner) => map_redis_error(inner),
        RunError::TimedOut => RecencyCacheError::timeout("connection checkout timed out"),
    }
}

fn map_redis_error(error: RedisError) -> RecencyCacheError {
    if error.is_timeout() {
        RecencyCacheError::timeout(error.to_string())
    } else {
        RecencyCacheError::backend(error.to_string())
    }
}

fn range_command(order: RankOrder) -> &'static str {
    match order {
        RankOrder::Ascending => "ZRANGE",
        RankOrder::Descending => "ZREVRANGE",
    }
}

#[async_trait]
impl RecencyCache for RedisRecencyCache {
    async fn add(&self, set: &StoreKey, member: &str, score: f64) -> Result<(), RecencyCacheError> {
        self.run("ZADD", |pool| async move {
            let mut conn = pool.get().await.map_err(map_run_error)?;
            let _: i64 = redis::cmd("ZADD")
                .arg(set.as_str())
                .arg(score)
                .arg(member)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(())
        })
        .await
    }

    async fn range_by_rank(
        &self,
        set: &StoreKey,
        start: i64,
        stop: i64,
        order: RankOrder,
    ) -> Result<Vec<ScoredMember>, RecencyCacheError> {
        let name = range_command(order);
        self.run(name, |pool| async move {
            let mut conn = pool.get().await.map_err(map_run_error)?;
            let pairs: Vec<(String, f64)> = redis::cmd(name)
                .arg(set.as_str())
                .arg(start)
                .arg(stop)
                .arg("WITHSCORES")
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(pairs
                .into_iter()
                .map(|(member, score)| ScoredMember::new(member, score))
                .collect())
        })
        .await
    }

    async fn set(&self, map: &StoreKey, field: &str, value: &str) -> Result<(), RecencyCacheError> {
        self.run("HSET", |pool| async move {
            let mut conn = pool.get().await.map_err(map_run_error)?;
            let _: i64 = redis::cmd("HSET")
                .arg(map.as_str())
                .arg(field)
                .arg(value)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(())
        })
        .await
    }

    async fn get(&self, map: &StoreKey, field: &str) -> Result<Option<String>, RecencyCacheError> {
        self.run("HGET", |pool| async move {
            let mut conn = pool.get().await.map_err(map_run_error)?;
            let value: Option<String> = redis::cmd("HGET")
                .arg(map.as_str())
                .arg(field)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(value)
        })
        .await
    }

    async fn exists(&self, map: &StoreKey, field: &str) -> Result<bool, RecencyCacheError> {
        self.run("HEXISTS", |pool| async move {
            let mut conn = pool.get().await.map_err(map_run_error)?;
            let present: bool = redis::cmd("HEXISTS")
                .arg(map.as_str())
                .arg(field)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            Ok(present)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for configuration and error mapping; no network.

    use super::*;
    use rstest::rstest;

    #[test]
    fn config_defaults_are_bounded() {
        let config = RedisCacheConfig::new("redis://localhost:6379");
        assert_eq!(config.url(), "redis://localhost:6379");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.command_timeout, Duration::from_secs(2));
    }

    #[test]
    fn config_builders_override_defaults() {
        let config = RedisCacheConfig::new("redis://cache")
            .with_max_size(3)
            .with_connection_timeout(Duration::from_millis(250))
            .with_command_timeout(Duration::from_millis(100));
        assert_eq!(config.max_size, 3);
        assert_eq!(config.connection_timeout, Duration::from_millis(250));
        assert_eq!(config.command_timeout, Duration::from_millis(100));
    }

    #[rstest]
    #[case(RankOrder::Ascending, "ZRANGE")]
    #[case(RankOrder::Descending, "ZREVRANGE")]
    fn picks_range_command_for_order(#[case] order: RankOrder, #[case] expected: &str) {
        assert_eq!(range_command(order), expected);
    }

    #[test]
    fn checkout_timeouts_map_to_timeout() {
        let error = map_run_error(RunError::TimedOut);
        assert!(matches!(error, RecencyCacheError::Timeout { .. }));
    }

    #[test]
    fn command_failures_map_to_backend() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = map_run_error(RunError::User(RedisError::from(refused)));
        assert!(matches!(error, RecencyCacheError::Backend { .. }));
    }

    #[tokio::test]
    async fn silent_server_surfaces_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("listener address");
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = RedisCacheConfig::new(format!("redis://{addr}"))
            .with_connection_timeout(Duration::from_millis(200))
            .with_command_timeout(Duration::from_millis(300));
        let cache = RedisRecencyCache::connect(config).await.expect("pool builds lazily");
        let key = StoreKey::new("news:recency").expect("valid key");

        let result = cache.exists(&key, "1").await;

        server.abort();
        assert!(
            matches!(result, Err(RecencyCacheError::Timeout { .. })),
            "{result:?}"
        );
    }

    #[tokio::test]
    async fn rejects_invalid_urls() {
        let result = RedisRecencyCache::connect(RedisCacheConfig::new("not a url")).await;
        assert!(matches!(result, Err(RecencyCacheError::Backend { .. })));
    }
}
