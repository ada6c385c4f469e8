//! Keys of nested containers.
//!
//! Containers are keyed by either integers or strings. String keys written in
//! canonical decimal form (`"0"`, `"42"`, `"-7"`) are normalized to integer keys,
//! so a dotted path such as `"items.0.name"` addresses the same entry as a list
//! index would.

use std::fmt;

use super::numeric_text;

/// A container key.
///
/// ```
/// # use hashpath::value::Key;
/// assert_eq!(Key::from("12"), Key::Int(12));
/// assert_eq!(Key::from("012"), Key::Str("012".to_string()));
/// assert!(Key::from("1.5").is_numeric());
/// assert!(!Key::from("name").is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Parses a key, normalizing canonical integers to [`Key::Int`].
    pub fn parse(s: &str) -> Self {
        if is_canonical_int(s)
            && let Ok(n) = s.parse::<i64>()
        {
            return Key::Int(n);
        }
        Key::Str(s.to_string())
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Returns true if the key reads as a number.
    ///
    /// Integer keys always do; string keys do when they hold a decimal number
    /// such as `"1.5"` or `" 3"`. This is what the `{n}` wildcard matches.
    pub fn is_numeric(&self) -> bool {
        match self {
            Key::Int(_) => true,
            Key::Str(s) => numeric_text(s).is_some(),
        }
    }

    /// Numeric reading of the key, if any.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Key::Int(n) => Some(*n as f64),
            Key::Str(s) => numeric_text(s),
        }
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits == "0" {
        return s == "0";
    }
    !digits.starts_with('0')
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        if is_canonical_int(&s)
            && let Ok(n) = s.parse::<i64>()
        {
            return Key::Int(n);
        }
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::parse(s)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n as i64)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}
