//! Ordered seed snapshot and JSON parsing.

use std::collections::HashSet;

use crate::error::SeedError;
use crate::seed::NewsSeed;

/// An ordered, duplicate-free collection of seed records.
///
/// Order is preserved exactly as it appears in the source file; consumers
/// rely on it when iterating the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsSeedSet {
    records: Vec<NewsSeed>,
}

impl NewsSeedSet {
    /// Parses a seed snapshot from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the JSON is malformed or is not an
    /// array of records, and [`SeedError::DuplicateId`] if an identifier
    /// appears more than once.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let records: Vec<NewsSeed> =
            serde_json::from_str(json).map_err(|e| SeedError::Parse {
                message: e.to_string(),
            })?;

        Self::from_records(records)
    }

    /// Builds a snapshot from already decoded records.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateId`] if an identifier appears more than
    /// once.
    pub fn from_records(records: Vec<NewsSeed>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(record.id) {
                return Err(SeedError::DuplicateId {
                    id: record.id,
                    index,
                });
            }
        }
        Ok(Self { records })
    }

    /// Returns the records in file order.
    #[must_use]
    pub fn records(&self) -> &[NewsSeed] {
        &self.records
    }

    /// Consumes the snapshot, yielding the records in file order.
    #[must_use]
    pub fn into_records(self) -> Vec<NewsSeed> {
        self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
