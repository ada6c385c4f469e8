//! Whole-container transforms: flattening, filtering, merging and comparing.

use super::{HashError, entries, extract_values, insert_literal, root, value_to_key};
use crate::{
    Result,
    value::{Container, Key, Value},
};

/// Collapses nested maps into one level keyed by joined paths.
///
/// Empty maps are kept as leaf entries, so `{"a": []}` flattens to
/// `{"a": []}` rather than disappearing. Objects are leaves.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"a": {"b": 1, "c": [2, 3]}, "d": []}));
/// let flat = hash::flatten(&data, ".")?;
/// assert_eq!(
///     flat,
///     Value::from(serde_json::json!({"a.b": 1, "a.c.0": 2, "a.c.1": 3, "d": []}))
/// );
/// assert_eq!(hash::expand(&flat, ".")?, data);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn flatten(data: &Value, separator: &str) -> Result<Value> {
    let container = root(data)?;
    let mut out = Container::with_capacity(container.len());
    for (key, value) in container.iter() {
        flatten_into(key.to_string(), value, separator, &mut out);
    }
    Ok(Value::Map(out))
}

fn flatten_into(path: String, value: &Value, separator: &str, out: &mut Container) {
    match value {
        Value::Map(inner) if !inner.is_empty() => {
            for (key, child) in inner.iter() {
                flatten_into(format!("{path}{separator}{key}"), child, separator, out);
            }
        }
        leaf => {
            out.set(Key::from(path), leaf.clone());
        }
    }
}

/// Rebuilds nested maps from keys joined by `separator`.
///
/// An empty separator leaves every key whole.
pub fn expand(data: &Value, separator: &str) -> Result<Value> {
    let flat = root(data)?;
    let mut out = Value::map();
    for (key, value) in flat.iter() {
        let keys: Vec<Key> = match key {
            Key::Str(path) if !separator.is_empty() => path.split(separator).map(Key::from).collect(),
            other => vec![other.clone()],
        };
        insert_literal(&mut out, &keys, value.clone());
    }
    Ok(out)
}

/// Returns true for the values [`filter`] keeps.
fn is_kept(value: &Value) -> bool {
    match value {
        Value::Int(0) => true,
        Value::Float(f) if *f == 0.0 => true,
        Value::Text(s) if s == "0" => true,
        other => !other.is_empty_value(),
    }
}

/// Recursively drops empty values: null, false, `""` and empty maps.
///
/// `0`, `0.0` and `"0"` are kept. Maps are filtered before being tested, so
/// a map holding only empty values is dropped too.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"a": 0, "b": "", "c": {"d": null}, "e": [false, "x"]}));
/// assert_eq!(
///     hash::filter(&data)?,
///     Value::from(serde_json::json!({"a": 0, "e": {"1": "x"}}))
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn filter(data: &Value) -> Result<Value> {
    filter_with(data, is_kept)
}

/// Recursively keeps the values for which `keep` returns true.
///
/// Nested maps are filtered first and then passed to `keep` themselves.
pub fn filter_with<F>(data: &Value, mut keep: F) -> Result<Value>
where
    F: FnMut(&Value) -> bool,
{
    Ok(Value::Map(filter_entries(entries(data)?, &mut keep)))
}

fn filter_entries(container: &Container, keep: &mut dyn FnMut(&Value) -> bool) -> Container {
    let mut out = Container::new();
    for (key, value) in container.iter() {
        let value = match value {
            Value::Map(inner) => Value::Map(filter_entries(inner, keep)),
            other => other.clone(),
        };
        if keep(&value) {
            out.set(key, value);
        }
    }
    out
}

/// Recursively merges `others` into `data`, in order.
///
/// String keys are overwritten; integer keys already present are appended
/// under the next free index; maps present on both sides merge. A scalar in
/// `others` is appended like a one-element list.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"tags": ["a"], "meta": {"x": 1}}));
/// let other = Value::from(serde_json::json!({"tags": ["b"], "meta": {"y": 2}}));
/// assert_eq!(
///     hash::merge(&data, &[other])?,
///     Value::from(serde_json::json!({"tags": ["a", "b"], "meta": {"x": 1, "y": 2}}))
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn merge(data: &Value, others: &[Value]) -> Result<Value> {
    let mut out = entries(data)?.clone();
    for other in others {
        match other {
            Value::Map(source) => merge_into(&mut out, source),
            Value::Object(object) => merge_into(&mut out, object.fields()),
            Value::Null => {}
            scalar => merge_into(&mut out, &Container::from_list([scalar.clone()])),
        }
    }
    Ok(Value::Map(out))
}

fn merge_into(target: &mut Container, source: &Container) {
    for (key, value) in source.iter() {
        if let Value::Map(incoming) = value
            && let Some(Value::Map(existing)) = target.get_mut(key)
        {
            merge_into(existing, incoming);
            continue;
        }
        if key.is_int() && target.contains_key(key) {
            target.push(value.clone());
        } else {
            target.set(key, value.clone());
        }
    }
}

/// Returns true if every value is an int, a float or numeric text.
///
/// Empty containers are not numeric.
pub fn numeric(data: &Value) -> Result<bool> {
    let container = entries(data)?;
    Ok(!container.is_empty() && container.values().all(Value::is_numeric))
}

/// Depth of `data`, following only the first value at each level.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!([[[1]], 2]));
/// assert_eq!(hash::dimensions(&data)?, 3);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn dimensions(data: &Value) -> Result<usize> {
    let mut current = entries(data)?;
    if current.is_empty() {
        return Ok(0);
    }
    let mut depth = 1;
    while let Some((_, Value::Map(next))) = current.first() {
        if next.is_empty() {
            break;
        }
        depth += 1;
        current = next;
    }
    Ok(depth)
}

/// Maximum depth of `data` over all branches.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"a": 1, "b": {"c": {"d": 2}}}));
/// assert_eq!(hash::max_dimensions(&data)?, 3);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn max_dimensions(data: &Value) -> Result<usize> {
    Ok(depth_of(entries(data)?))
}

fn depth_of(container: &Container) -> usize {
    container
        .values()
        .map(|value| match value {
            Value::Map(inner) => depth_of(inner) + 1,
            _ => 1,
        })
        .max()
        .unwrap_or(0)
}

/// Extracts `path` and maps every match through `f`.
pub fn map<F>(data: &Value, path: &str, f: F) -> Result<Vec<Value>>
where
    F: FnMut(&Value) -> Value,
{
    Ok(extract_values(data, path)?.iter().map(f).collect())
}

/// Extracts `path` and folds the matches with `f`, starting from `init`.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!([{"n": 2}, {"n": 3}]));
/// let total = hash::reduce(&data, "{n}.n", |acc, v| acc + v.as_int().unwrap_or(0), 0)?;
/// assert_eq!(total, 5);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn reduce<T, F>(data: &Value, path: &str, f: F, init: T) -> Result<T>
where
    F: FnMut(T, &Value) -> T,
{
    Ok(extract_values(data, path)?.iter().fold(init, f))
}

/// Extracts `path` and passes all matches to `f` at once.
pub fn apply<T, F>(data: &Value, path: &str, f: F) -> Result<T>
where
    F: FnOnce(Vec<Value>) -> T,
{
    Ok(f(extract_values(data, path)?))
}

/// Returns true if every entry of `needle` is found in `data`, recursively.
///
/// Scalars compare loosely. Empty containers on either side never match.
pub fn contains(data: &Value, needle: &Value) -> Result<bool> {
    let (haystack, needle) = (entries(data)?, entries(needle)?);
    if haystack.is_empty() || needle.is_empty() {
        return Ok(false);
    }
    Ok(contains_entries(haystack, needle))
}

fn contains_entries(haystack: &Container, needle: &Container) -> bool {
    needle.iter().all(|(key, wanted)| match (haystack.get(key), wanted) {
        (None, _) => false,
        (Some(_), Value::Map(inner)) if inner.is_empty() => true,
        (Some(Value::Map(found)), Value::Map(inner)) => contains_entries(found, inner),
        (Some(found), wanted) => found.loose_eq(wanted),
    })
}

/// Entries of `data` and `compare` that the other lacks or holds differently.
///
/// Entries of `data` come first, then the remaining entries of `compare`.
/// Values compare loosely.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let a = Value::from(serde_json::json!({"x": 1, "y": 2, "z": 3}));
/// let b = Value::from(serde_json::json!({"x": 1, "y": 5, "w": 4}));
/// assert_eq!(
///     hash::diff(&a, &b)?,
///     Value::from(serde_json::json!({"y": 2, "z": 3, "w": 4}))
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn diff(data: &Value, compare: &Value) -> Result<Value> {
    let (left, right) = (entries(data)?, entries(compare)?);
    if left.is_empty() {
        return Ok(Value::Map(right.clone()));
    }
    if right.is_empty() {
        return Ok(Value::Map(left.clone()));
    }

    let same = |key: &Key, value: &Value, other: &Container| {
        other.get(key).is_some_and(|o| o.loose_eq(value))
    };
    let mut out = Container::new();
    for (key, value) in left.iter() {
        if !same(key, value, right) {
            out.set(key, value.clone());
        }
    }
    for (key, value) in right.iter() {
        if !same(key, value, left) && !out.contains_key(key) {
            out.set(key, value.clone());
        }
    }
    Ok(Value::Map(out))
}

/// Adds the keys of `compare` missing from `data`, recursing into maps on
/// both sides. Existing values of `data` are never replaced.
pub fn merge_diff(data: &Value, compare: &Value) -> Result<Value> {
    let (base, extra) = (entries(data)?, entries(compare)?);
    if base.is_empty() {
        return Ok(Value::Map(extra.clone()));
    }
    let mut out = base.clone();
    merge_missing(&mut out, extra);
    Ok(Value::Map(out))
}

fn merge_missing(target: &mut Container, extra: &Container) {
    for (key, value) in extra.iter() {
        if !target.contains_key(key) {
            target.set(key, value.clone());
            continue;
        }
        if let (Some(Value::Map(existing)), Value::Map(incoming)) = (target.get_mut(key), value) {
            if existing.is_empty() {
                *existing = incoming.clone();
            } else {
                merge_missing(existing, incoming);
            }
        }
    }
}

/// Turns integer-keyed entries into keys holding null.
///
/// String-keyed entries are kept. With `assoc` false, a container whose keys
/// are all integers is returned unchanged.
///
/// # Errors
///
/// [`HashError::InvalidKey`] if an integer-keyed value is not a scalar.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!({"0": "Tree", "1": "CounterCache", "Upload": {"folder": "x"}}));
/// assert_eq!(
///     hash::normalize(&data, true)?,
///     Value::from(serde_json::json!({"Tree": null, "CounterCache": null, "Upload": {"folder": "x"}}))
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn normalize(data: &Value, assoc: bool) -> Result<Value> {
    let container = entries(data)?;
    if !assoc && container.keys().all(Key::is_int) {
        return Ok(Value::Map(container.clone()));
    }

    let mut out = Container::with_capacity(container.len());
    for (key, value) in container.iter() {
        if key.is_int() {
            let name = value_to_key(value).map_err(|err| match err {
                HashError::InvalidKey { actual } => HashError::InvalidKey {
                    actual: format!("{actual} at index {key}"),
                },
                other => other,
            })?;
            out.set(name, Value::Null);
        } else {
            out.set(key, value.clone());
        }
    }
    Ok(Value::Map(out))
}
