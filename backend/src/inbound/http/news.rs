//! News HTTP handlers.
//!
//! ```text
//! GET  /api/v1/news
//! GET  /api/v1/news/page/{size}
//! GET  /api/v1/news/title?title=...
//! GET  /api/v1/news/{id}
//! POST /api/v1/news
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{InsertOutcome, ReconciliationReport};
use crate::domain::{Error, News, NewsId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, NewsSchema, ReconciliationReportSchema};
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned after an insert.
pub const INSERT_ACK_MESSAGE: &str = "Insert ElasticSearch and Redis success!";

/// Query string for title search.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TitleSearchQuery {
    /// Fuzzy title text; omitted means empty.
    pub title: Option<String>,
}

/// Response payload for a successful insert.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertNewsResponseBody {
    #[schema(example = 42)]
    pub id: i64,
    /// Recency score the record was stored with.
    pub unix_seconds: i64,
    #[schema(example = "Insert ElasticSearch and Redis success!")]
    pub message: String,
    #[schema(value_type = ReconciliationReportSchema)]
    pub reconciliation: ReconciliationReport,
}

impl From<InsertOutcome> for InsertNewsResponseBody {
    fn from(value: InsertOutcome) -> Self {
        Self {
            id: value.id.get(),
            unix_seconds: value.unix_seconds,
            message: INSERT_ACK_MESSAGE.to_owned(),
            reconciliation: value.reconciliation,
        }
    }
}

fn parse_path_number<T: std::str::FromStr>(raw: &str, field: &str) -> Result<T, Error> {
    raw.trim().parse::<T>().map_err(|_| {
        Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
            "field": field,
            "value": raw,
            "code": "invalid_integer",
        }))
    })
}

/// List every cached record, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/news",
    responses(
        (status = 200, description = "All cached news in ascending recency", body = [NewsSchema]),
        (status = 503, description = "Recency cache unavailable", body = ErrorSchema)
    ),
    tags = ["news"],
    operation_id = "listNews"
)]
#[get("/news")]
pub async fn list_news(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<News>>> {
    let records = state.news_query.get_all().await?;
    Ok(web::Json(records))
}

/// Return the `size` oldest cached records.
#[utoipa::path(
    get,
    path = "/api/v1/news/page/{size}",
    params(("size" = i64, Path, description = "Maximum number of records")),
    responses(
        (status = 200, description = "Oldest records first", body = [NewsSchema]),
        (status = 400, description = "Size is not an integer", body = ErrorSchema),
        (status = 503, description = "Recency cache unavailable", body = ErrorSchema)
    ),
    tags = ["news"],
    operation_id = "pageNews"
)]
#[get("/news/page/{size}")]
pub async fn page_news(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<News>>> {
    let size: i64 = parse_path_number(&path.into_inner(), "size")?;
    let records = state.news_query.get_page(size).await?;
    Ok(web::Json(records))
}

/// Fuzzy title search returning at most three records.
#[utoipa::path(
    get,
    path = "/api/v1/news/title",
    params(TitleSearchQuery),
    responses(
        (status = 200, description = "Best matches in relevance order", body = [NewsSchema]),
        (status = 503, description = "Search index unavailable", body = ErrorSchema)
    ),
    tags = ["news"],
    operation_id = "searchNewsByTitle"
)]
#[get("/news/title")]
pub async fn search_news(
    state: web::Data<HttpState>,
    query: web::Query<TitleSearchQuery>,
) -> ApiResult<web::Json<Vec<News>>> {
    let title = query.into_inner().title.unwrap_or_default();
    let records = state.news_query.search_by_title(&title).await?;
    Ok(web::Json(records))
}

/// Fetch one cached record by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "Cached record", body = NewsSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No cached record", body = ErrorSchema),
        (status = 503, description = "Recency cache unavailable", body = ErrorSchema)
    ),
    tags = ["news"],
    operation_id = "getNews"
)]
#[get("/news/{id}")]
pub async fn get_news(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<News>> {
    let id: NewsId = parse_path_number(&path.into_inner(), "id")?;
    state
        .news_query
        .get_by_id(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| {
            Error::not_found(format!("news {id} not found")).with_details(json!({ "id": id }))
        })
}

/// Insert a record into both stores and repair missing snapshot records.
#[utoipa::path(
    post,
    path = "/api/v1/news",
    request_body = NewsSchema,
    responses(
        (status = 201, description = "Record written to cache and index", body = InsertNewsResponseBody),
        (status = 400, description = "Invalid record", body = ErrorSchema),
        (status = 503, description = "A store rejected the write", body = ErrorSchema)
    ),
    tags = ["news"],
    operation_id = "insertNews"
)]
#[post("/news")]
pub async fn insert_news(
    state: web::Data<HttpState>,
    payload: web::Json<News>,
) -> ApiResult<HttpResponse> {
    let outcome = state.news.insert(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(InsertNewsResponseBody::from(outcome)))
}

/// Register the news routes on an `/api/v1` scope.
///
/// Literal segments are registered before `/news/{id}` so they are not
/// captured as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_news)
        .service(page_news)
        .service(search_news)
        .service(get_news)
        .service(insert_news);
}

#[cfg(test)]
#[path = "news_tests.rs"]
mod tests;
