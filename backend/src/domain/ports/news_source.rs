//! Port interface for the one-shot seed loader.
use async_trait::async_trait;

use super::define_port_error;
use crate::domain::News;

define_port_error! {
    /// Errors raised while loading the seed snapshot.
    pub enum NewsSourceError (store = "news_source") {
        /// The underlying data could not be read.
        Read { message: String } => "news source could not be read: {message}",
        /// The data was read but is not a valid record collection.
        Parse { message: String } => "news source is invalid: {message}",
    }
}

/// Produces the ordered collection of records the service starts from.
///
/// Called exactly once at process start; a failure is fatal to startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Load every record in source order.
    async fn load(&self) -> Result<Vec<News>, NewsSourceError>;
}
