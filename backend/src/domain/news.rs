//! News record model and the startup snapshot.
//!
//! `News` is the single entity exchanged between the synchroniser, the query
//! service and both stores. Its serde form (camelCase JSON) is the value
//! written to the cache hash and the document written to the search index.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{NewsSource, NewsSourceError};

/// Format of [`News::published_at`].
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Stable news identifier assigned by the caller or the seed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsId(i64);

impl NewsId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NewsId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewsId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// A news item.
///
/// `published_at` and `unix_seconds` describe the same instant; only
/// `unix_seconds` is used for ordering. A non-positive `unix_seconds` means
/// the record carries no usable timestamp.
///
/// # Examples
/// ```
/// use news_backend::domain::{News, NewsId};
///
/// let news = News::new(NewsId::new(1), "Alpha").with_unix_seconds(100);
/// assert!(news.has_usable_timestamp());
/// assert_eq!(news.recency_score(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: NewsId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub unix_seconds: i64,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: i32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub cluster_id: Option<i64>,
}

impl News {
    /// Create a record with the given identifier and title; every other
    /// field is empty.
    pub fn new(id: NewsId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            body: None,
            published_at: None,
            unix_seconds: 0,
            link: None,
            source: None,
            kind: 0,
            category_name: None,
            tags: None,
            cluster_id: None,
        }
    }

    /// Set the recency timestamp.
    pub fn with_unix_seconds(mut self, unix_seconds: i64) -> Self {
        self.unix_seconds = unix_seconds;
        self
    }

    /// Whether the record carries a timestamp usable as a recency score.
    pub fn has_usable_timestamp(&self) -> bool {
        self.unix_seconds > 0
    }

    /// Score used in the recency sorted set.
    pub fn recency_score(&self) -> f64 {
        self.unix_seconds as f64
    }

    /// Stamp the record with `now` unless it already has a usable timestamp.
    ///
    /// Only a missing `published_at` is filled in; an existing textual form
    /// is left untouched.
    pub fn stamped(mut self, now: DateTime<Utc>) -> Self {
        if self.has_usable_timestamp() {
            return self;
        }
        self.unix_seconds = now.timestamp();
        if self.published_at.as_deref().is_none_or(|text| text.trim().is_empty()) {
            self.published_at = Some(now.format(PUBLISHED_AT_FORMAT).to_string());
        }
        self
    }

    /// Serialise the record into the string stored in the cache hash.
    pub fn to_cache_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a record previously written by [`News::to_cache_value`].
    pub fn from_cache_value(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

/// Read-only collection of records captured once at startup.
///
/// Cloning is cheap; every clone shares the same records. Order is the order
/// in which the source produced them.
#[derive(Debug, Clone, Default)]
pub struct NewsSnapshot {
    records: Arc<[News]>,
}

impl NewsSnapshot {
    /// Wrap an ordered list of records.
    pub fn new(records: Vec<News>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load the snapshot from a source. Call once per process.
    ///
    /// # Errors
    /// Propagates the source's failure; there is no partial snapshot.
    pub async fn load<S>(source: &S) -> Result<Self, NewsSourceError>
    where
        S: NewsSource + ?Sized,
    {
        source.load().await.map(Self::new)
    }

    /// Records in source order.
    pub fn records(&self) -> &[News] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the news model.

    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn stamping_assigns_time_when_missing(#[case] unix_seconds: i64) {
        let news = News::new(NewsId::new(1), "Alpha")
            .with_unix_seconds(unix_seconds)
            .stamped(fixture_now());
        assert_eq!(news.unix_seconds, fixture_now().timestamp());
        assert_eq!(news.published_at.as_deref(), Some("2026-03-14T09:26:53"));
    }

    #[test]
    fn stamping_keeps_caller_supplied_time() {
        let mut news = News::new(NewsId::new(1), "Alpha").with_unix_seconds(200);
        news.published_at = Some("1970-01-01T00:03:20".to_owned());
        let stamped = news.clone().stamped(fixture_now());
        assert_eq!(stamped, news);
    }

    #[test]
    fn stamping_keeps_existing_published_text() {
        let mut news = News::new(NewsId::new(1), "Alpha");
        news.published_at = Some("yesterday".to_owned());
        let stamped = news.stamped(fixture_now());
        assert_eq!(stamped.published_at.as_deref(), Some("yesterday"));
        assert_eq!(stamped.unix_seconds, fixture_now().timestamp());
    }

    #[test]
    fn serialises_with_wire_field_names() {
        let mut news = News::new(NewsId::new(7), "Budget").with_unix_seconds(42);
        news.kind = 3;
        news.category_name = Some("Economy".to_owned());
        news.cluster_id = Some(9);

        let value = serde_json::to_value(&news).expect("serialise");
        assert_eq!(value["id"], json!(7));
        assert_eq!(value["unixSeconds"], json!(42));
        assert_eq!(value["type"], json!(3));
        assert_eq!(value["categoryName"], json!("Economy"));
        assert_eq!(value["clusterId"], json!(9));
    }

    #[test]
    fn cache_value_round_trips() {
        let news = News::new(NewsId::new(3), "Gamma").with_unix_seconds(300);
        let value = news.to_cache_value().expect("encode");
        assert_eq!(News::from_cache_value(&value).expect("decode"), news);
    }

    #[test]
    fn cache_value_rejects_garbage() {
        assert!(News::from_cache_value("not json").is_err());
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case(" 7 ", Some(7))]
    #[case("-3", Some(-3))]
    #[case("abc", None)]
    fn parses_ids(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(raw.parse::<NewsId>().ok().map(NewsId::get), expected);
    }

    #[test]
    fn snapshot_clones_share_records() {
        let snapshot = NewsSnapshot::new(vec![News::new(NewsId::new(1), "Alpha")]);
        let clone = snapshot.clone();
        assert_eq!(clone.len(), 1);
        assert!(std::ptr::eq(snapshot.records(), clone.records()));
    }
}
