//! Zipping parallel extractions into a keyed map.

use super::{HashError, extract_values, format, root, value_to_key};
use crate::{
    Result,
    value::{Container, Key, Value},
};

/// Where `combine` reads its keys or values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Values extracted by a path
    Path(String),
    /// Strings produced by [`format`] from several paths
    Format { template: String, paths: Vec<String> },
}

impl PathSpec {
    /// Builds a [`PathSpec::Format`], see [`format`].
    pub fn format<I, S>(template: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathSpec::Format {
            template: template.into(),
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            PathSpec::Path(path) => path.is_empty(),
            PathSpec::Format { paths, .. } => paths.is_empty(),
        }
    }

    fn resolve(&self, data: &Value) -> Result<Vec<Value>> {
        match self {
            PathSpec::Path(path) => extract_values(data, path),
            PathSpec::Format { template, paths } => Ok(format(data, paths.as_slice(), template)?
                .into_iter()
                .map(Value::Text)
                .collect()),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Path(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        PathSpec::Path(path)
    }
}

/// The paths of a `combine` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineSpec {
    pub keys: PathSpec,
    pub values: Option<PathSpec>,
    pub group: Option<String>,
}

impl CombineSpec {
    pub fn new(keys: impl Into<PathSpec>) -> Self {
        Self {
            keys: keys.into(),
            values: None,
            group: None,
        }
    }

    pub fn with_values(mut self, values: impl Into<PathSpec>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Builds a map from the values at `key_path` to the values at `value_path`.
///
/// Without a value path, or when it matches nothing, every key maps to null.
/// With a group path, the result is a map of groups, each holding the
/// key/value pairs whose position in the group extraction names it; keys
/// past the end of the group extraction land in group `0`.
///
/// # Errors
///
/// [`HashError::CombineLengthMismatch`] when the key and value extractions
/// differ in length, and [`HashError::InvalidKey`] when a key or group is not
/// a scalar.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!([
///     {"id": 1, "name": "mark", "team": "a"},
///     {"id": 2, "name": "jane", "team": "b"},
///     {"id": 3, "name": "sara", "team": "a"},
/// ]));
/// let names = hash::combine(&data, "{n}.id", Some("{n}.name"), None)?;
/// assert_eq!(names, Value::from(serde_json::json!({"1": "mark", "2": "jane", "3": "sara"})));
///
/// let grouped = hash::combine(&data, "{n}.id", Some("{n}.name"), Some("{n}.team"))?;
/// assert_eq!(
///     grouped,
///     Value::from(serde_json::json!({"a": {"1": "mark", "3": "sara"}, "b": {"2": "jane"}}))
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn combine(
    data: &Value,
    key_path: &str,
    value_path: Option<&str>,
    group_path: Option<&str>,
) -> Result<Value> {
    let mut spec = CombineSpec::new(key_path);
    if let Some(values) = value_path {
        spec = spec.with_values(values);
    }
    if let Some(group) = group_path {
        spec = spec.with_group(group);
    }
    combine_with(data, &spec)
}

/// [`combine`] with template specs for keys or values.
pub fn combine_with(data: &Value, spec: &CombineSpec) -> Result<Value> {
    if root(data)?.is_empty() {
        return Ok(Value::map());
    }

    let keys = spec.keys.resolve(data)?;
    if keys.is_empty() {
        return Ok(Value::map());
    }
    let mut values = match &spec.values {
        Some(values) if !values.is_empty() => values.resolve(data)?,
        _ => Vec::new(),
    };
    if values.is_empty() {
        values = vec![Value::Null; keys.len()];
    }
    if keys.len() != values.len() {
        return Err(HashError::CombineLengthMismatch {
            keys: keys.len(),
            values: values.len(),
        }
        .into());
    }
    let keys = keys
        .iter()
        .map(value_to_key)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if let Some(group_path) = &spec.group {
        let groups = extract_values(data, group_path)?;
        if !groups.is_empty() {
            tracing::debug!(group = %group_path, rows = keys.len(), "combine grouped");
            let mut out = Container::new();
            for (i, (key, value)) in keys.into_iter().zip(values).enumerate() {
                let group = match groups.get(i) {
                    Some(g) if !g.is_null() => value_to_key(g)?,
                    _ => Key::Int(0),
                };
                if !out.contains_key(&group) {
                    out.set(group.clone(), Value::map());
                }
                if let Some(Value::Map(bucket)) = out.get_mut(&group) {
                    bucket.set(key, value);
                }
            }
            return Ok(Value::Map(out));
        }
    }

    Ok(Value::Map(keys.into_iter().zip(values).collect()))
}
