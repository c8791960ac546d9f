//! Unit coverage for the query service read paths.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;

use super::{NewsQueryService, TITLE_SEARCH_LIMIT};
use crate::domain::ports::{
    MockRecencyCache, MockSearchIndex, NewsQuery, RankOrder, RecencyCacheError, ScoredMember,
    SearchIndexError, StoreKeys,
};
use crate::domain::{ErrorCode, News, NewsId, NewsSnapshot, NewsSyncService};

fn make_service(
    cache: MockRecencyCache,
    index: MockSearchIndex,
) -> NewsQueryService<MockRecencyCache, MockSearchIndex> {
    NewsQueryService::new(NewsSyncService::new(
        Arc::new(cache),
        Arc::new(index),
        NewsSnapshot::default(),
        StoreKeys::default(),
        Arc::new(DefaultClock),
    ))
}

fn cached(id: i64, title: &str, unix_seconds: i64) -> String {
    News::new(NewsId::new(id), title)
        .with_unix_seconds(unix_seconds)
        .to_cache_value()
        .expect("encode fixture")
}

#[tokio::test]
async fn get_all_reads_every_rank_ascending_and_skips_bad_entries() {
    let mut cache = MockRecencyCache::new();
    cache
        .expect_range_by_rank()
        .withf(|set, start, stop, order| {
            set.as_str() == "news:recency" && *start == 0 && *stop == -1 && *order == RankOrder::Ascending
        })
        .times(1)
        .returning(|_, _, _, _| {
            Ok(vec![
                ScoredMember::new("1", 100.0),
                ScoredMember::new("2", 150.0),
                ScoredMember::new("3", 175.0),
                ScoredMember::new("4", 200.0),
            ])
        });
    cache.expect_get().returning(|_, field| match field {
        "1" => Ok(Some(cached(1, "Alpha", 100))),
        "2" => Ok(Some("{not json".to_owned())),
        "3" => Err(RecencyCacheError::timeout("HGET")),
        "4" => Ok(Some(cached(4, "Beta", 200))),
        _ => Ok(None),
    });

    let records = make_service(cache, MockSearchIndex::new())
        .get_all()
        .await
        .expect("listing succeeds");

    let titles: Vec<_> = records.iter().map(|news| news.title.as_str()).collect();
    assert_eq!(titles, ["Alpha", "Beta"]);
}

#[tokio::test]
async fn get_all_surfaces_range_failures() {
    let mut cache = MockRecencyCache::new();
    cache
        .expect_range_by_rank()
        .returning(|_, _, _, _| Err(RecencyCacheError::backend("down")));

    let error = make_service(cache, MockSearchIndex::new())
        .get_all()
        .await
        .expect_err("range failure surfaces");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case(0)]
#[case(-4)]
#[tokio::test]
async fn get_page_with_non_positive_size_skips_the_store(#[case] size: i64) {
    let records = make_service(MockRecencyCache::new(), MockSearchIndex::new())
        .get_page(size)
        .await
        .expect("empty page");

    assert!(records.is_empty());
}

#[rstest]
#[case(1, 0)]
#[case(5, 4)]
#[case(1_000, 999)]
#[tokio::test]
async fn get_page_requests_inclusive_rank_window(#[case] size: i64, #[case] stop: i64) {
    let mut cache = MockRecencyCache::new();
    cache
        .expect_range_by_rank()
        .withf(move |_, start, requested_stop, _| *start == 0 && *requested_stop == stop)
        .times(1)
        .returning(|_, _, _, _| Ok(Vec::new()));

    make_service(cache, MockSearchIndex::new())
        .get_page(size)
        .await
        .expect("page succeeds");
}

#[tokio::test]
async fn get_by_id_decodes_cached_value() {
    let mut cache = MockRecencyCache::new();
    cache
        .expect_get()
        .withf(|map, field| map.as_str() == "news:items" && field == "7")
        .returning(|_, _| Ok(Some(cached(7, "Seven", 70))));

    let news = make_service(cache, MockSearchIndex::new())
        .get_by_id(NewsId::new(7))
        .await
        .expect("lookup succeeds")
        .expect("record present");

    assert_eq!(news.title, "Seven");
}

#[tokio::test]
async fn get_by_id_returns_none_when_absent() {
    let mut cache = MockRecencyCache::new();
    cache.expect_get().returning(|_, _| Ok(None));

    let news = make_service(cache, MockSearchIndex::new())
        .get_by_id(NewsId::new(99))
        .await
        .expect("lookup succeeds");

    assert!(news.is_none());
}

#[rstest]
#[case(Ok(Some("garbage".to_owned())), ErrorCode::InternalError)]
#[case(Err(RecencyCacheError::backend("down")), ErrorCode::ServiceUnavailable)]
#[tokio::test]
async fn get_by_id_maps_failures(
    #[case] response: Result<Option<String>, RecencyCacheError>,
    #[case] expected: ErrorCode,
) {
    let mut cache = MockRecencyCache::new();
    cache.expect_get().return_once(move |_, _| response);

    let error = make_service(cache, MockSearchIndex::new())
        .get_by_id(NewsId::new(1))
        .await
        .expect_err("lookup fails");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn search_queries_title_with_limit_and_caps_hits() {
    let mut index = MockSearchIndex::new();
    index
        .expect_fuzzy_search()
        .withf(|name, query| {
            name.as_str() == "news"
                && query.field == "title"
                && query.text == "alpa"
                && query.size == TITLE_SEARCH_LIMIT
                && query.from == 0
        })
        .times(1)
        .returning(|_, _| {
            Ok((1..=5)
                .map(|id| News::new(NewsId::new(id), "Alpha"))
                .collect())
        });

    let hits = make_service(MockRecencyCache::new(), index)
        .search_by_title(" alpa ")
        .await
        .expect("search succeeds");

    assert_eq!(hits.len(), TITLE_SEARCH_LIMIT);
}

#[rstest]
#[case(SearchIndexError::timeout("search"), ErrorCode::ServiceUnavailable)]
#[case(SearchIndexError::decode("bad hit"), ErrorCode::InternalError)]
#[tokio::test]
async fn search_maps_index_failures(#[case] failure: SearchIndexError, #[case] expected: ErrorCode) {
    let mut index = MockSearchIndex::new();
    index.expect_fuzzy_search().return_once(move |_, _| Err(failure));

    let error = make_service(MockRecencyCache::new(), index)
        .search_by_title("anything")
        .await
        .expect_err("search fails");

    assert_eq!(error.code(), expected);
}
