//! News synchronisation backend.
//!
//! Keeps a Redis recency cache and an Elasticsearch index in step with a
//! startup snapshot and serves recency listings, lookups and fuzzy title
//! search over HTTP. The [`domain`] module holds the model, ports and
//! services; [`inbound`] and [`outbound`] hold the adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
