//! DTOs for Elasticsearch request bodies and responses.
//!
//! Only the fields the adapter reads are modelled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::News;
use crate::domain::ports::FuzzyQuery;

#[derive(Debug, Serialize)]
pub(super) struct SearchRequestDto<'a> {
    pub(super) from: usize,
    pub(super) size: usize,
    pub(super) query: QueryDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) enum QueryDto<'a> {
    #[serde(rename = "match_all")]
    MatchAll {},
    #[serde(rename = "multi_match")]
    MultiMatch {
        query: &'a str,
        fields: [&'a str; 1],
        fuzziness: &'static str,
    },
}

impl<'a> SearchRequestDto<'a> {
    pub(super) fn from_query(query: &'a FuzzyQuery) -> Self {
        let body = if query.is_blank() {
            QueryDto::MatchAll {}
        } else {
            QueryDto::MultiMatch {
                query: query.text.trim(),
                fields: [query.field.as_str()],
                fuzziness: "AUTO",
            }
        };
        Self {
            from: query.from,
            size: query.size,
            query: body,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GetResponseDto {
    #[serde(default)]
    pub(super) found: bool,
    #[serde(rename = "_source")]
    pub(super) source: Option<News>,
}

impl GetResponseDto {
    pub(super) fn into_document(self) -> Option<News> {
        if self.found { self.source } else { None }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    pub(super) hits: HitsDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitsDto {
    #[serde(default)]
    pub(super) hits: Vec<HitDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitDto {
    #[serde(rename = "_source")]
    pub(super) source: News,
}

impl SearchResponseDto {
    pub(super) fn into_documents(self) -> Vec<News> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
