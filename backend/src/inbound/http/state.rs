//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureNewsCommand, FixtureNewsQuery, NewsCommand, NewsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub news: Arc<dyn NewsCommand>,
    pub news_query: Arc<dyn NewsQuery>,
}

impl HttpState {
    /// Bundle the write and read ports.
    pub fn new(news: Arc<dyn NewsCommand>, news_query: Arc<dyn NewsQuery>) -> Self {
        Self { news, news_query }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureNewsCommand), Arc::new(FixtureNewsQuery))
    }
}
