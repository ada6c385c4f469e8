//! The path query engine.
//!
//! Every operation takes a root value that must be a container (a map, a list
//! or an [`Object`](crate::value::Object)) and fails with
//! [`HashError::InvalidDataType`] otherwise. Absent keys are never an error:
//! reads return an empty list or a default, writes create or skip them.
//!
//! Paths are resolved left to right. Each segment is applied to every container
//! matched by the previous one, and matches are collected in visiting order,
//! following each container's own key order.
//!
//! # Usage
//!
//! ```
//! use hashpath::{hash, value::Value};
//!
//! let data = Value::from(serde_json::json!({
//!     "users": [
//!         {"id": 1, "name": "mark", "active": true},
//!         {"id": 2, "name": "jane", "active": false},
//!     ]
//! }));
//!
//! let active = hash::extract(&data, "users.{n}[active=true].name")?;
//! assert_eq!(active, Value::list(["mark"]));
//!
//! let data = hash::insert(data, "users.{n}.role", "member")?;
//! assert_eq!(hash::get(&data, "users.1.role", Value::Null)?, "member");
//!
//! let data = hash::remove(data, "users.{n}[id=1]")?;
//! assert_eq!(hash::extract(&data, "users.{n}.id")?, Value::list([2]));
//! # Ok::<(), hashpath::Error>(())
//! ```

mod combine;
pub mod errors;
mod format;
mod nest;
mod sort;
mod transform;

pub use combine::{CombineSpec, PathSpec, combine, combine_with};
pub use errors::HashError;
pub use format::format;
pub use nest::{NestOptions, nest};
pub use sort::{SortDirection, SortMode, SortOptions, sort};
pub use transform::{
    apply, contains, diff, dimensions, expand, filter, filter_with, flatten, map, max_dimensions,
    merge, merge_diff, normalize, numeric, reduce,
};

use crate::{
    Result,
    path::{PathExpr, Segment, literal_keys_of},
    value::{Container, IndexableContainer, Key, Value},
};

/// The path argument of [`get`].
///
/// Paths may be given as dotted text, a list of keys, a single integer key or
/// null. A [`Value`] converts into the matching variant, or into
/// [`PathArg::Invalid`] when it cannot name a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathArg {
    /// No path: [`get`] returns its default
    Null,
    /// Dotted text, split on every `.`
    Text(String),
    /// Explicit keys
    Keys(Vec<Key>),
    /// A value that cannot name a path; carries its type name
    Invalid(&'static str),
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        PathArg::Text(s.to_string())
    }
}

impl From<String> for PathArg {
    fn from(s: String) -> Self {
        PathArg::Text(s)
    }
}

impl From<&String> for PathArg {
    fn from(s: &String) -> Self {
        PathArg::Text(s.clone())
    }
}

impl From<i64> for PathArg {
    fn from(n: i64) -> Self {
        PathArg::Keys(vec![Key::Int(n)])
    }
}

impl From<i32> for PathArg {
    fn from(n: i32) -> Self {
        PathArg::Keys(vec![Key::from(n)])
    }
}

impl From<Key> for PathArg {
    fn from(key: Key) -> Self {
        PathArg::Keys(vec![key])
    }
}

impl From<Vec<Key>> for PathArg {
    fn from(keys: Vec<Key>) -> Self {
        PathArg::Keys(keys)
    }
}

impl From<&[Key]> for PathArg {
    fn from(keys: &[Key]) -> Self {
        PathArg::Keys(keys.to_vec())
    }
}

impl From<&[&str]> for PathArg {
    fn from(keys: &[&str]) -> Self {
        PathArg::Keys(keys.iter().map(|k| Key::from(*k)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathArg {
    fn from(keys: [&str; N]) -> Self {
        PathArg::Keys(keys.into_iter().map(Key::from).collect())
    }
}

impl From<Option<&str>> for PathArg {
    fn from(path: Option<&str>) -> Self {
        path.map_or(PathArg::Null, PathArg::from)
    }
}

impl From<&Value> for PathArg {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => PathArg::Null,
            Value::Text(s) => PathArg::Text(s.clone()),
            Value::Int(n) => PathArg::Keys(vec![Key::Int(*n)]),
            Value::Map(c) if c.is_list() => c
                .values()
                .map(|v| match v {
                    Value::Int(n) => Some(Key::Int(*n)),
                    Value::Text(s) => Some(Key::parse(s)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(PathArg::Invalid("map"), PathArg::Keys),
            other => PathArg::Invalid(other.type_name()),
        }
    }
}

/// Outcome of a literal path lookup.
///
/// Keeps "nothing there" apart from "something there that is empty" until the
/// public boundary collapses it to a default or an empty list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Lookup<'a> {
    Found(&'a Value),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub(crate) fn found(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }
}

/// Follows literal keys. A key holding `Null` counts as absent.
pub(crate) fn lookup<'a>(data: &'a Value, keys: &[Key]) -> Lookup<'a> {
    let mut current = data;
    for key in keys {
        match current.as_indexable().and_then(|c| c.get(key)) {
            Some(Value::Null) | None => return Lookup::NotFound,
            Some(next) => current = next,
        }
    }
    Lookup::Found(current)
}

/// Validates that `data` is a container and returns its map-like view.
pub(crate) fn root(data: &Value) -> std::result::Result<&dyn IndexableContainer, HashError> {
    data.as_indexable().ok_or_else(|| HashError::InvalidDataType {
        actual: data.type_name().to_string(),
    })
}

/// Validates that `data` is a container and returns its entries.
pub(crate) fn entries(data: &Value) -> std::result::Result<&Container, HashError> {
    match data {
        Value::Map(c) => Ok(c),
        Value::Object(o) => Ok(o.fields()),
        other => Err(HashError::InvalidDataType {
            actual: other.type_name().to_string(),
        }),
    }
}

/// Converts a scalar to the key it would be stored under.
///
/// Floats truncate, booleans become `0`/`1` and null becomes `""`.
pub(crate) fn value_to_key(value: &Value) -> std::result::Result<Key, HashError> {
    match value {
        Value::Null => Ok(Key::Str(String::new())),
        Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
        Value::Int(n) => Ok(Key::Int(*n)),
        Value::Float(f) => Ok(Key::Int(f.trunc() as i64)),
        Value::Text(s) => Ok(Key::parse(s)),
        Value::Object(o) if o.display().is_some() => Ok(Key::parse(o.display().unwrap_or_default())),
        other => Err(HashError::InvalidKey {
            actual: other.type_name().to_string(),
        }),
    }
}

/// Gets the value at a literal path, or `default` if any segment is absent.
///
/// Wildcards and filters are not interpreted: `{n}` is looked up as a key.
/// A key holding `Null` counts as absent.
///
/// The root type is checked first and the path argument second, so an
/// invalid path is reported even when `data` is empty. A null path returns
/// `default` without looking at the entries of `data`.
///
/// # Errors
///
/// [`HashError::InvalidDataType`] if `data` is not a container and
/// [`HashError::InvalidPath`] if the path argument cannot name a path.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"a": {"b": [10, 20]}}));
/// assert_eq!(hash::get(&data, "a.b.1", Value::Null)?, 20);
/// assert_eq!(hash::get(&data, ["a", "b", "0"], Value::Null)?, 10);
/// assert_eq!(hash::get(&data, "a.missing", "fallback")?, "fallback");
/// assert!(hash::get(&data, &Value::Bool(true), Value::Null).is_err());
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn get(data: &Value, path: impl Into<PathArg>, default: impl Into<Value>) -> Result<Value> {
    let container = root(data)?;
    let keys = match path.into() {
        PathArg::Null => return Ok(default.into()),
        PathArg::Text(text) => text.split('.').map(Key::from).collect::<Vec<_>>(),
        PathArg::Keys(keys) => keys,
        PathArg::Invalid(actual) => {
            return Err(HashError::InvalidPath {
                actual: actual.to_string(),
            }
            .into());
        }
    };
    if container.is_empty() {
        return Ok(default.into());
    }

    match lookup(data, &keys) {
        Lookup::Found(value) => Ok(value.clone()),
        Lookup::NotFound => Ok(default.into()),
    }
}

/// Extracts every value reached by `path`, as a list.
///
/// An empty path returns `data` unchanged. Paths that match nothing return an
/// empty list. Literal paths behave like [`get`] and skip `Null` values.
pub fn extract(data: &Value, path: &str) -> Result<Value> {
    root(data)?;
    if path.is_empty() {
        return Ok(data.clone());
    }

    let expr = PathExpr::parse(path);
    let found = extract_refs(data, &expr);
    tracing::trace!(path, matches = found.len(), "extract");
    Ok(Value::list(found.into_iter().cloned()))
}

/// Like [`extract`], returning the matches as a `Vec`.
///
/// An empty path yields the values of `data`.
pub fn extract_values(data: &Value, path: &str) -> Result<Vec<Value>> {
    let container = root(data)?;
    if path.is_empty() {
        return Ok(container.iter().map(|(_, v)| v.clone()).collect());
    }
    let expr = PathExpr::parse(path);
    Ok(extract_refs(data, &expr).into_iter().cloned().collect())
}

/// Resolves a parsed path, borrowing the matches from `data`.
pub(crate) fn extract_refs<'a>(data: &'a Value, expr: &PathExpr) -> Vec<&'a Value> {
    if let Some(keys) = expr.literal_keys() {
        return lookup(data, &keys).found().into_iter().collect();
    }

    let mut context = vec![data];
    for segment in expr.segments() {
        let mut next = Vec::new();
        for item in context {
            let Some(container) = item.as_indexable() else {
                continue;
            };
            next.extend(
                container
                    .iter()
                    .filter(|(key, value)| segment.matches_key(key) && segment.accepts(value))
                    .map(|(_, value)| value),
            );
        }
        context = next;
    }
    context
}

/// Returns true if `path` matches anything in `data`.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!([{"id": 1}, {"id": 2}]));
/// assert!(hash::check(&data, "{n}[id=2]")?);
/// assert!(!hash::check(&data, "{n}[id=3]")?);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn check(data: &Value, path: &str) -> Result<bool> {
    let container = root(data)?;
    if path.is_empty() {
        return Ok(!container.is_empty());
    }
    Ok(!extract_refs(data, &PathExpr::parse(path)).is_empty())
}

/// Inserts `value` at every position matched by `path`.
///
/// Literal paths create missing intermediate maps, replacing scalars that are
/// in the way. With wildcards or filters, each matching branch is written
/// independently; when the last segment is a wildcard or filter, `value` is
/// merged into each matched container (integer keys appended, string keys
/// overwritten).
pub fn insert(data: Value, path: &str, value: impl Into<Value>) -> Result<Value> {
    root(&data)?;
    let value = value.into();
    let expr = PathExpr::parse(path);
    let mut data = data;
    insert_segments(&mut data, expr.segments(), &value);
    tracing::trace!(path, literal = expr.is_literal(), "insert");
    Ok(data)
}

fn insert_segments(target: &mut Value, segments: &[Segment], value: &Value) {
    if let Some(keys) = literal_keys_of(segments) {
        insert_literal(target, &keys, value.clone());
        return;
    }
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let Some(container) = target.as_indexable_mut() else {
        return;
    };

    for (key, child) in container.iter_mut() {
        if !segment.matches_key(key) || !segment.accepts(child) {
            continue;
        }
        if rest.is_empty() {
            merge_value(child, value);
            continue;
        }
        if child.is_null() {
            *child = Value::map();
        }
        if child.is_container() {
            insert_segments(child, rest, value);
        }
    }
}

/// Sets `keys` to `value`, creating intermediate maps.
pub(crate) fn insert_literal(target: &mut Value, keys: &[Key], value: Value) {
    let Some(container) = target.as_indexable_mut() else {
        return;
    };
    match keys {
        [] => {}
        [last] => {
            container.set(last.clone(), value);
        }
        [head, rest @ ..] => {
            if !container.get(head).is_some_and(Value::is_container) {
                container.set(head.clone(), Value::map());
            }
            if let Some(child) = container.get_mut(head) {
                insert_literal(child, rest, value);
            }
        }
    }
}

fn merge_value(target: &mut Value, value: &Value) {
    match target {
        Value::Map(existing) => {
            let merged = array_merge(existing, value);
            *existing = merged;
        }
        Value::Object(object) => {
            if let Ok(incoming) = entries(value) {
                for (k, v) in incoming.iter() {
                    object.fields_mut().set(k, v.clone());
                }
            }
        }
        _ => {}
    }
}

/// Concatenates `base` and `value`: integer keys are renumbered in order,
/// string keys keep the last value. A scalar `value` is appended; null adds
/// nothing.
pub(crate) fn array_merge(base: &Container, value: &Value) -> Container {
    fn append(out: &mut Container, key: &Key, value: &Value) {
        if key.is_int() {
            out.push(value.clone());
        } else {
            out.set(key.clone(), value.clone());
        }
    }

    let mut out = Container::with_capacity(base.len() + 1);
    for (k, v) in base.iter() {
        append(&mut out, k, v);
    }
    match value {
        Value::Null => {}
        Value::Map(c) => c.iter().for_each(|(k, v)| append(&mut out, k, v)),
        Value::Object(o) => o.fields().iter().for_each(|(k, v)| append(&mut out, k, v)),
        scalar => out.push(scalar.clone()),
    }
    out
}

/// Removes every position matched by `path`.
///
/// Literal paths delete the last key if present; absent keys are ignored.
/// With wildcards or filters, matched entries are deleted in every branch, and
/// containers emptied by the removal are pruned from their parent.
pub fn remove(data: Value, path: &str) -> Result<Value> {
    root(&data)?;
    let expr = PathExpr::parse(path);
    let mut data = data;
    remove_segments(&mut data, expr.segments());
    tracing::trace!(path, literal = expr.is_literal(), "remove");
    Ok(data)
}

fn remove_segments(target: &mut Value, segments: &[Segment]) {
    if let Some(keys) = literal_keys_of(segments) {
        remove_literal(target, &keys);
        return;
    }
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let Some(container) = target.as_indexable_mut() else {
        return;
    };

    let mut doomed = Vec::new();
    for (key, child) in container.iter_mut() {
        if !segment.matches_key(key) || !segment.accepts(child) {
            continue;
        }
        if rest.is_empty() {
            doomed.push(key.clone());
            continue;
        }
        let Some(before) = child.as_indexable().map(|c| c.len()) else {
            continue;
        };
        remove_segments(child, rest);
        if before > 0 && child.as_indexable().is_some_and(|c| c.is_empty()) {
            tracing::trace!(%key, "pruning emptied container");
            doomed.push(key.clone());
        }
    }
    for key in &doomed {
        container.remove(key);
    }
}

fn remove_literal(target: &mut Value, keys: &[Key]) {
    let Some(container) = target.as_indexable_mut() else {
        return;
    };
    match keys {
        [] => {}
        [last] => {
            container.remove(last);
        }
        [head, rest @ ..] => {
            if let Some(child) = container.get_mut(head) {
                remove_literal(child, rest);
            }
        }
    }
}
