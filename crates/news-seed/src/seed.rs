//! Seed record type.

use serde::{Deserialize, Serialize};

/// One news record as it appears in a seed snapshot.
///
/// Every field except `id` is optional in the file. Missing numeric fields
/// default to zero; a zero `unix_seconds` means the record carries no usable
/// timestamp.
///
/// # Example
///
/// ```
/// use news_seed::NewsSeed;
///
/// let seed: NewsSeed = serde_json::from_str(
///     r#"{"Id": 9, "Title": "Budget", "CatName": "Economy", "TimeUnix": 1700000000}"#,
/// )
/// .expect("valid seed record");
///
/// assert_eq!(seed.id, 9);
/// assert_eq!(seed.category_name.as_deref(), Some("Economy"));
/// assert_eq!(seed.unix_seconds, 1_700_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSeed {
    /// Stable identifier of the record.
    #[serde(alias = "Id")]
    pub id: i64,
    /// Headline.
    #[serde(default, alias = "Title")]
    pub title: Option<String>,
    /// Short summary.
    #[serde(default, alias = "desc", alias = "Desc", alias = "Description")]
    pub description: Option<String>,
    /// Full article text.
    #[serde(default, alias = "Body")]
    pub body: Option<String>,
    /// Publication instant in `YYYY-MM-DDTHH:MM:SS` form.
    #[serde(default, alias = "time", alias = "Time", alias = "PublishedAt")]
    pub published_at: Option<String>,
    /// Publication instant in seconds since the Unix epoch.
    #[serde(default, alias = "timeUnix", alias = "TimeUnix", alias = "UnixSeconds")]
    pub unix_seconds: i64,
    /// Canonical article URL.
    #[serde(default, alias = "Link")]
    pub link: Option<String>,
    /// Publisher name.
    #[serde(default, alias = "Source")]
    pub source: Option<String>,
    /// Numeric category code.
    #[serde(default, rename = "type", alias = "Type")]
    pub kind: i32,
    /// Human-readable category name.
    #[serde(default, alias = "catName", alias = "CatName", alias = "CategoryName")]
    pub category_name: Option<String>,
    /// Free-form tags.
    #[serde(default, alias = "Tags")]
    pub tags: Option<String>,
    /// Optional grouping key for related stories.
    #[serde(default, alias = "ClusterId")]
    pub cluster_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"Id": 1, "Desc": "d", "Time": "2022-01-01T00:00:00", "Type": 3}"#)]
    #[case(r#"{"id": 1, "description": "d", "publishedAt": "2022-01-01T00:00:00", "type": 3}"#)]
    fn accepts_both_field_spellings(#[case] json: &str) {
        let seed: NewsSeed = serde_json::from_str(json).expect("seed parses");
        assert_eq!(seed.id, 1);
        assert_eq!(seed.description.as_deref(), Some("d"));
        assert_eq!(seed.published_at.as_deref(), Some("2022-01-01T00:00:00"));
        assert_eq!(seed.kind, 3);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let seed: NewsSeed = serde_json::from_str(r#"{"Id": 4}"#).expect("seed parses");
        assert_eq!(seed.title, None);
        assert_eq!(seed.unix_seconds, 0);
        assert_eq!(seed.kind, 0);
        assert_eq!(seed.cluster_id, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let seed: NewsSeed =
            serde_json::from_str(r#"{"Id": 4, "Thumbnail": "x.png"}"#).expect("seed parses");
        assert_eq!(seed.id, 4);
    }

    #[test]
    fn null_optional_fields_are_none() {
        let seed: NewsSeed =
            serde_json::from_str(r#"{"Id": 5, "ClusterId": null, "Tags": null}"#)
                .expect("seed parses");
        assert_eq!(seed.cluster_id, None);
        assert_eq!(seed.tags, None);
    }
}
