//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the news endpoints and the health probes
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`NewsSchema`], [`ReconciliationReportSchema`]) that provide OpenAPI
//!   definitions without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::news::InsertNewsResponseBody;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, NewsSchema, ReconciliationReportSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "News backend API",
        description = "Recency listing, lookup and fuzzy title search over cached news.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::news::list_news,
        crate::inbound::http::news::page_news,
        crate::inbound::http::news::search_news,
        crate::inbound::http::news::get_news,
        crate::inbound::http::news::insert_news,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        NewsSchema,
        ReconciliationReportSchema,
        InsertNewsResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "news", description = "News listing, lookup, search and insert"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
