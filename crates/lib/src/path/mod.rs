//! Path expressions for addressing nested data.
//!
//! A path is a dot separated list of segments. Each segment names which keys of
//! the current containers it matches, and may restrict the matched values with
//! bracket filters.
//!
//! | Segment | Matches |
//! |---|---|
//! | `name`, `3` | the literal key |
//! | `{n}` | numeric keys |
//! | `{s}` | string keys |
//! | `{*}` | every key |
//! | `key[attr=v]` | `key`, when the value is a container whose `attr` passes the filter |
//!
//! Dots inside brackets do not split segments, so `{n}[price>1.5].name` has two
//! segments.
//!
//! ```
//! use hashpath::path::{Matcher, PathExpr};
//!
//! let path = PathExpr::parse("{n}.Article[published=Y].title");
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.segments()[0].matcher(), &Matcher::Numeric);
//! assert!(path.segments()[1].has_filters());
//! assert!(!path.is_literal());
//! ```

use std::{fmt, str::FromStr};

pub mod errors;
pub mod filter;

pub use errors::PathError;
pub use filter::{Filter, FilterOp};

use crate::value::{IndexableContainer, Key, Value};

/// Splits a path on dots that are not inside brackets.
///
/// ```
/// # use hashpath::path::tokenize;
/// assert_eq!(tokenize("a.b[x=1.5].c"), vec!["a", "b[x=1.5]", "c"]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
pub fn tokenize(path: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                tokens.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&path[start..]);
    tokens
}

/// Which keys a segment matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// `{n}`: numeric keys
    Numeric,
    /// `{s}`: string keys
    Text,
    /// `{*}`: every key
    Any,
    /// A literal key
    Literal(Key),
}

impl Matcher {
    fn parse(token: &str) -> Self {
        match token {
            "{n}" => Matcher::Numeric,
            "{s}" => Matcher::Text,
            "{*}" => Matcher::Any,
            literal => Matcher::Literal(Key::parse(literal)),
        }
    }

    /// Returns true if `key` is matched.
    ///
    /// Literal numeric keys also match keys of equal numeric value, so `1`
    /// matches a string key `"01"`.
    pub fn matches(&self, key: &Key) -> bool {
        match self {
            Matcher::Numeric => key.is_numeric(),
            Matcher::Text => key.is_str(),
            Matcher::Any => true,
            Matcher::Literal(literal) => {
                literal == key
                    || matches!(
                        (literal.as_number(), key.as_number()),
                        (Some(a), Some(b)) if a == b
                    )
            }
        }
    }

    /// Returns true for `{n}`, `{s}` and `{*}`.
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Matcher::Literal(_))
    }
}

/// One segment of a path: a key matcher plus its filters.
#[derive(Debug, Clone)]
pub struct Segment {
    raw: String,
    matcher: Matcher,
    filters: Vec<Filter>,
}

impl Segment {
    fn parse(token: &str) -> (Self, Vec<PathError>) {
        let (key, conditions) = match token.find('[') {
            Some(i) => token.split_at(i),
            None => (token, ""),
        };
        let (filters, errors) = if conditions.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            filter::parse_filters(token, conditions)
        };
        let segment = Segment {
            raw: token.to_string(),
            matcher: Matcher::parse(key),
            filters,
        };
        (segment, errors)
    }

    /// The segment as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Returns true for a literal key without filters.
    pub fn is_literal(&self) -> bool {
        !self.matcher.is_wildcard() && self.filters.is_empty()
    }

    /// Returns true if `key` is selected by this segment's matcher.
    pub fn matches_key(&self, key: &Key) -> bool {
        self.matcher.matches(key)
    }

    /// Returns true if `value` passes every filter of this segment.
    ///
    /// Filters only apply to containers; scalars never pass a filtered segment.
    pub fn accepts(&self, value: &Value) -> bool {
        if self.filters.is_empty() {
            return true;
        }
        value
            .as_indexable()
            .is_some_and(|candidate| self.filters_match(candidate))
    }

    /// Returns true if every filter accepts `candidate`.
    pub fn filters_match(&self, candidate: &dyn IndexableContainer) -> bool {
        self.filters.iter().all(|f| f.matches(candidate))
    }
}

/// A parsed path expression.
#[derive(Debug, Clone)]
pub struct PathExpr {
    raw: String,
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parses a path permissively.
    ///
    /// Malformed filters are dropped or never match; parsing itself cannot fail.
    pub fn parse(path: &str) -> Self {
        let segments = tokenize(path)
            .into_iter()
            .map(|token| Segment::parse(token).0)
            .collect();
        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// Parses a path, rejecting malformed filters and invalid patterns.
    ///
    /// ```
    /// # use hashpath::path::PathExpr;
    /// assert!(PathExpr::parse_strict("{n}[id=1].name").is_ok());
    /// assert!(PathExpr::parse_strict("{n}[id=1.name").is_err());
    /// ```
    pub fn parse_strict(path: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for token in tokenize(path) {
            let (segment, mut errors) = Segment::parse(token);
            if !errors.is_empty() {
                return Err(errors.remove(0));
            }
            segments.push(segment);
        }
        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// Builds a literal path from keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let segments: Vec<Segment> = keys
            .into_iter()
            .map(|k| {
                let key = k.into();
                Segment {
                    raw: key.to_string(),
                    matcher: Matcher::Literal(key),
                    filters: Vec::new(),
                }
            })
            .collect();
        let raw = segments
            .iter()
            .map(Segment::as_str)
            .collect::<Vec<_>>()
            .join(".");
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if every segment is a literal key without filters.
    pub fn is_literal(&self) -> bool {
        all_literal(&self.segments)
    }

    /// The literal keys of a literal path.
    pub fn literal_keys(&self) -> Option<Vec<Key>> {
        literal_keys_of(&self.segments)
    }
}

/// Returns true if all segments of `segments` are literal keys without filters.
pub(crate) fn all_literal(segments: &[Segment]) -> bool {
    segments.iter().all(Segment::is_literal)
}

/// Literal keys of `segments`, if they are all literal.
pub(crate) fn literal_keys_of(segments: &[Segment]) -> Option<Vec<Key>> {
    segments
        .iter()
        .map(|s| match &s.matcher {
            Matcher::Literal(key) if s.filters.is_empty() => Some(key.clone()),
            _ => None,
        })
        .collect()
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathExpr::parse_strict(s)
    }
}
