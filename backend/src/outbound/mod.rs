//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **cache**: Redis-backed `RecencyCache`
//! - **search**: Elasticsearch-backed `SearchIndex`
//! - **memory**: in-process cache and index for local runs and tests
//! - **seed**: JSON seed file `NewsSource`
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod cache;
pub mod memory;
pub mod search;
pub mod seed;
