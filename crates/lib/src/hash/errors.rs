//! Error types for engine operations.
//!
//! Absent keys are never errors: reads collapse them to an empty list or a
//! default, writes create or ignore them. The variants here cover misuse that
//! the engine cannot resolve on its own.

use thiserror::Error;

/// Structured error types for engine operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// The root data is not a container
    #[error("Invalid data type: expected a map or object, found {actual}")]
    InvalidDataType { actual: String },

    /// The path argument is neither text, a key list nor null
    #[error("Invalid path: expected text, a list of keys or null, found {actual}")]
    InvalidPath { actual: String },

    /// `combine` extracted a different number of keys and values
    #[error("combine needs an equal number of keys and values: {keys} keys, {values} values")]
    CombineLengthMismatch { keys: usize, values: usize },

    /// A value cannot be used as a container key
    #[error("Invalid key: {actual} values cannot be used as keys")]
    InvalidKey { actual: String },

    /// `nest` found no root records
    #[error("Invalid data to nest: {reason}")]
    InvalidNestData { reason: String },
}

impl HashError {
    /// Check if the root data was not a container
    pub fn is_invalid_data_type(&self) -> bool {
        matches!(self, HashError::InvalidDataType { .. })
    }

    /// Check if a path argument was rejected
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, HashError::InvalidPath { .. })
    }

    /// Check if `combine` found mismatched key and value counts
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, HashError::CombineLengthMismatch { .. })
    }

    /// Check if a value could not be used as a key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, HashError::InvalidKey { .. })
    }

    /// Check if `nest` rejected its input
    pub fn is_invalid_nest_data(&self) -> bool {
        matches!(self, HashError::InvalidNestData { .. })
    }
}

// Conversion from HashError to the main Error type
impl From<HashError> for crate::Error {
    fn from(err: HashError) -> Self {
        crate::Error::Hash(err)
    }
}
