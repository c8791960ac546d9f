//! Elasticsearch outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `SearchIndex` port
//! using the Elasticsearch REST API.

mod dto;
mod elasticsearch;

pub use elasticsearch::ElasticsearchIndex;
