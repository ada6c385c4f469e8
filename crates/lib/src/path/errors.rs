//! Error types for path parsing.
//!
//! Path evaluation is permissive: a malformed segment simply never matches.
//! These errors are only reported by [`PathExpr::parse_strict`](super::PathExpr::parse_strict),
//! which callers use to validate user-supplied paths up front.

use thiserror::Error;

/// Structured error types for path parsing.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A bracket filter could not be parsed
    #[error("Invalid filter '{filter}' in segment '{segment}': {reason}")]
    InvalidFilter {
        segment: String,
        filter: String,
        reason: String,
    },

    /// A `[` was never closed
    #[error("Unterminated filter in segment '{segment}'")]
    UnterminatedFilter { segment: String },

    /// A `/pattern/` filter is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl PathError {
    /// Check if this error is about a bracket filter
    pub fn is_filter_error(&self) -> bool {
        matches!(
            self,
            PathError::InvalidFilter { .. } | PathError::UnterminatedFilter { .. }
        )
    }

    /// Check if this error is about a regular expression
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, PathError::InvalidPattern { .. })
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
