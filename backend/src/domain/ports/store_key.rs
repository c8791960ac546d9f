//! Validated names of the keys and index the store adapters address.
use thiserror::Error;

const DEFAULT_SORTED_SET_KEY: &str = "news:recency";
const DEFAULT_HASH_KEY: &str = "news:items";
const DEFAULT_INDEX_NAME: &str = "news";

/// Name of a sorted set, hash map or search index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    /// Construct a key after validating that it is non-empty and trimmed.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreKeyValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(StoreKeyValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(StoreKeyValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`StoreKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreKeyValidationError {
    /// Key is empty after trimming whitespace.
    #[error("store key must not be empty")]
    Empty,
    /// Key contains whitespace.
    #[error("store key must not contain whitespace")]
    ContainsWhitespace,
}

/// The three names the synchroniser writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    /// Sorted set of identifiers scored by recency.
    pub sorted_set: StoreKey,
    /// Hash map from identifier to serialised record.
    pub hash: StoreKey,
    /// Search index holding one document per identifier.
    pub index: StoreKey,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            sorted_set: StoreKey(DEFAULT_SORTED_SET_KEY.to_owned()),
            hash: StoreKey(DEFAULT_HASH_KEY.to_owned()),
            index: StoreKey(DEFAULT_INDEX_NAME.to_owned()),
        }
    }
}
