//! Error types for seed snapshot parsing.

use thiserror::Error;

/// Errors that can occur when parsing a seed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed JSON is malformed or is not an array of records.
    #[error("invalid seed JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// Two records in the snapshot share an identifier.
    #[error("duplicate news id {id} at index {index}")]
    DuplicateId {
        /// The repeated identifier.
        id: i64,
        /// Position of the second occurrence.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_formats_correctly() {
        let err = SeedError::Parse {
            message: "expected value".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid seed JSON: expected value");
    }

    #[test]
    fn duplicate_id_formats_correctly() {
        let err = SeedError::DuplicateId { id: 7, index: 3 };
        assert_eq!(err.to_string(), "duplicate news id 7 at index 3");
    }
}
