//! Seed snapshot parsing for the news synchronization backend.
//!
//! The backend captures one ordered collection of news records at startup
//! and treats it as the authoritative source for its reconciliation passes.
//! This crate parses that collection from JSON. It knows nothing about the
//! backend's stores or domain types; records are converted at the point of
//! use.
//!
//! Field names are accepted in both spellings found in historic seed files:
//! the original PascalCase names (`Id`, `Desc`, `TimeUnix`, `CatName`, ...)
//! and the camelCase names used by the backend's wire format.
//!
//! # Example
//!
//! ```
//! use news_seed::NewsSeedSet;
//!
//! let json = r#"[
//!     {"Id": 1, "Title": "Alpha", "TimeUnix": 100},
//!     {"id": 2, "title": "Beta", "unixSeconds": 200}
//! ]"#;
//!
//! let seeds = NewsSeedSet::from_json(json).expect("valid seed file");
//! assert_eq!(seeds.len(), 2);
//! assert_eq!(seeds.records()[0].title.as_deref(), Some("Alpha"));
//! ```

mod error;
mod seed;
mod seed_set;

pub use error::SeedError;
pub use seed::NewsSeed;
pub use seed_set::NewsSeedSet;
