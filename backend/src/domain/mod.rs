//! Domain primitives, ports and services.
//!
//! Purpose: keep the news model and the synchronisation rules independent of
//! Redis, Elasticsearch and HTTP. Adapters plug in through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - News / NewsId / NewsSnapshot: the record model and startup snapshot.
//! - NewsSyncService: write path implementing `NewsCommand`.
//! - NewsQueryService: read path implementing `NewsQuery`.

pub mod error;
pub mod news;
pub mod news_query;
pub mod news_sync;
pub mod ports;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::news::{News, NewsId, NewsSnapshot, PUBLISHED_AT_FORMAT};
pub use self::news_query::{NewsQueryService, TITLE_FIELD, TITLE_SEARCH_LIMIT};
pub use self::news_sync::NewsSyncService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use news_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
