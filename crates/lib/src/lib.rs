//!
//! hashpath: path expressions over nested, ordered data.
//! This library extracts, inserts, removes and reshapes values inside nested containers
//! addressed by dotted path expressions.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: scalars, ordered containers (`value::Container`) and
//!   class-named records (`value::Object`). Both container kinds implement
//!   `value::IndexableContainer`, the capability the engine traverses through.
//! * **Paths (`path::PathExpr`)**: dot separated segments. A segment is a literal key, a
//!   wildcard (`{n}`, `{s}`, `{*}`) and optionally a list of bracket filters such as
//!   `[id=2]`, `[price>10]` or `[name=/^A/i]`.
//! * **Engine (`hash`)**: `extract`, `get`, `insert`, `remove`, `combine`, `sort`,
//!   `flatten`/`expand` and the rest of the data helpers.
//!
//! ```
//! use hashpath::{hash, value::Value};
//!
//! let data = Value::from(serde_json::json!([
//!     {"id": "1", "title": "First"},
//!     {"id": "2", "title": "Second"},
//! ]));
//!
//! let titles = hash::extract(&data, "{n}.title")?;
//! assert_eq!(titles, Value::list(["First", "Second"]));
//!
//! let second = hash::extract(&data, "{n}[id=2].title")?;
//! assert_eq!(second, Value::list(["Second"]));
//! # Ok::<(), hashpath::Error>(())
//! ```

pub mod hash;
pub mod path;
pub mod value;

pub use hash::{HashError, SortDirection, SortMode, SortOptions};
pub use path::{PathError, PathExpr};
pub use value::{Container, IndexableContainer, Key, Object, Value};

/// Result type used throughout the hashpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the hashpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured engine errors from the hash module
    #[error(transparent)]
    Hash(hash::HashError),

    /// Structured path parsing errors from the path module
    #[error(transparent)]
    Path(path::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Hash(_) => "hash",
            Error::Path(_) => "path",
        }
    }

    /// Check if this error was raised by the engine.
    pub fn is_hash_error(&self) -> bool {
        matches!(self, Error::Hash(_))
    }

    /// Check if this error was raised while parsing a path.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if the root data was not a container.
    pub fn is_invalid_data_type(&self) -> bool {
        match self {
            Error::Hash(hash_err) => hash_err.is_invalid_data_type(),
            _ => false,
        }
    }

    /// Check if a path argument was rejected.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Hash(hash_err) => hash_err.is_invalid_path(),
            Error::Path(_) => true,
            _ => false,
        }
    }

    /// Check if `combine` found a different number of keys and values.
    pub fn is_length_mismatch(&self) -> bool {
        match self {
            Error::Hash(hash_err) => hash_err.is_length_mismatch(),
            _ => false,
        }
    }
}
