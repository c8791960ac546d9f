//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`RecencyCache`], [`SearchIndex`], [`NewsSource`]) describe
//! the stores the domain talks to. Driving ports ([`NewsCommand`],
//! [`NewsQuery`]) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod news_command;
mod news_query;
mod news_source;
mod recency_cache;
mod search_index;
mod store_key;

#[cfg(test)]
pub use news_command::MockNewsCommand;
pub use news_command::{FixtureNewsCommand, InsertOutcome, NewsCommand, ReconciliationReport};
#[cfg(test)]
pub use news_query::MockNewsQuery;
pub use news_query::{FixtureNewsQuery, NewsQuery};
#[cfg(test)]
pub use news_source::MockNewsSource;
pub use news_source::{NewsSource, NewsSourceError};
#[cfg(test)]
pub use recency_cache::MockRecencyCache;
pub use recency_cache::{RankOrder, RecencyCache, RecencyCacheError, ScoredMember};
#[cfg(test)]
pub use search_index::MockSearchIndex;
pub use search_index::{FuzzyQuery, SearchIndex, SearchIndexError};
pub use store_key::{StoreKey, StoreKeyValidationError, StoreKeys};
