//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is unreachable or timed out.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "news 42 not found")]
    message: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::News`].
#[derive(ToSchema)]
#[schema(as = crate::domain::News, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewsSchema {
    #[schema(example = 42)]
    id: i64,
    #[schema(example = "Budget vote passes")]
    title: String,
    description: Option<String>,
    body: Option<String>,
    /// Publication time, `YYYY-MM-DDTHH:MM:SS`.
    #[schema(example = "2026-03-14T09:26:53")]
    published_at: Option<String>,
    /// Publication time in Unix seconds; the recency sort key.
    #[schema(example = 1_773_480_413_i64)]
    unix_seconds: i64,
    link: Option<String>,
    source: Option<String>,
    /// Numeric category code.
    #[schema(rename = "type")]
    kind: i32,
    category_name: Option<String>,
    tags: Option<String>,
    cluster_id: Option<i64>,
}

/// OpenAPI schema for [`crate::domain::ports::ReconciliationReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::ReconciliationReport, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReconciliationReportSchema {
    examined: usize,
    repaired: usize,
    skipped: usize,
    failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "service_unavailable", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn news_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<NewsSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(NewsSchema::name(), "crate.domain.News");
        for field in ["publishedAt", "unixSeconds", "categoryName", "clusterId", "\"type\""] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
