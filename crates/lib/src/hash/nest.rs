//! Building trees from flat, parent-linked records.

use std::collections::{HashMap, HashSet};

use super::{HashError, extract_values, get, root};
use crate::{
    Result,
    value::{Container, Key, Value},
};

/// Options for [`nest`].
#[derive(Debug, Clone, PartialEq)]
pub struct NestOptions {
    /// Path to each record's id, starting with the record wildcard
    pub id_path: String,
    /// Path to each record's parent id, starting with the record wildcard
    pub parent_path: String,
    /// Key children are stored under
    pub children: String,
    /// Only keep trees whose root has this id or parent id
    pub root: Option<Value>,
}

impl Default for NestOptions {
    fn default() -> Self {
        Self {
            id_path: "{n}.id".to_string(),
            parent_path: "{n}.parent_id".to_string(),
            children: "children".to_string(),
            root: None,
        }
    }
}

impl NestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_path(mut self, path: impl Into<String>) -> Self {
        self.id_path = path.into();
        self
    }

    pub fn with_parent_path(mut self, path: impl Into<String>) -> Self {
        self.parent_path = path.into();
        self
    }

    pub fn with_children(mut self, key: impl Into<String>) -> Self {
        self.children = key.into();
        self
    }

    pub fn with_root(mut self, root: impl Into<Value>) -> Self {
        self.root = Some(root.into());
        self
    }
}

/// The id path with its leading record segment removed.
fn record_keys(path: &str) -> Vec<Key> {
    path.split('.').skip(1).map(Key::from).collect()
}

fn id_text(value: &Value) -> String {
    value.to_text().unwrap_or_else(|| value.to_string())
}

struct Record<'a> {
    value: &'a Value,
    id: Value,
    parent: Value,
}

/// Nests a flat list of records into trees.
///
/// A record whose parent id is empty, or names no record of `data`, starts a
/// tree; every other record is appended to the children of its parent. Roots
/// are then narrowed to those whose id or parent id equals `options.root`,
/// which defaults to the parent id of the first root.
///
/// Empty input nests to an empty list.
///
/// # Errors
///
/// [`HashError::InvalidNestData`] when a record is not a container, or when
/// every record names an existing parent so no tree can start.
///
/// ```
/// # use hashpath::{hash, hash::NestOptions, value::Value};
/// let data = Value::from(serde_json::json!([
///     {"id": 1, "parent_id": null, "name": "root"},
///     {"id": 2, "parent_id": 1, "name": "child"},
///     {"id": 3, "parent_id": 2, "name": "grandchild"},
/// ]));
/// let tree = hash::nest(&data, &NestOptions::default())?;
/// assert_eq!(
///     hash::extract(&tree, "0.children.0.children.{n}.name")?,
///     Value::list(["grandchild"])
/// );
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn nest(data: &Value, options: &NestOptions) -> Result<Value> {
    let container = root(data)?;
    if container.is_empty() {
        return Ok(Value::map());
    }

    let id_keys = record_keys(&options.id_path);
    let parent_keys = record_keys(&options.parent_path);
    let known: HashSet<String> = extract_values(data, &options.id_path)?
        .iter()
        .map(id_text)
        .collect();

    let mut records = Vec::with_capacity(container.len());
    for (key, value) in container.iter() {
        if !value.is_container() {
            return Err(HashError::InvalidNestData {
                reason: format!("record {key} is {}, not a container", value.type_name()),
            }
            .into());
        }
        records.push(Record {
            value,
            id: get(value, id_keys.clone(), Value::Null)?,
            parent: get(value, parent_keys.clone(), Value::Null)?,
        });
    }

    let mut roots = Vec::new();
    let mut children: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        let parent = id_text(&record.parent);
        if record.parent.is_empty_value() || !known.contains(&parent) {
            roots.push(i);
        } else {
            children.entry(parent).or_default().push(i);
        }
    }

    let Some(&first) = roots.first() else {
        return Err(HashError::InvalidNestData {
            reason: "every record names an existing parent, so there is no root".to_string(),
        }
        .into());
    };
    let root_id = options
        .root
        .clone()
        .unwrap_or_else(|| records[first].parent.clone());
    tracing::debug!(records = records.len(), roots = roots.len(), "nest");

    let builder = TreeBuilder {
        records: &records,
        children: &children,
        key: Key::from(options.children.as_str()),
    };
    let mut out = Container::new();
    let mut path = Vec::new();
    for i in roots {
        let record = &records[i];
        if !record.id.loose_eq(&root_id) && !record.parent.loose_eq(&root_id) {
            continue;
        }
        out.push(builder.build(i, &mut path));
    }
    Ok(Value::Map(out))
}

struct TreeBuilder<'a> {
    records: &'a [Record<'a>],
    children: &'a HashMap<String, Vec<usize>>,
    key: Key,
}

impl TreeBuilder<'_> {
    /// Copies record `i` with its children attached. `path` holds the records
    /// being built above it, which are skipped to break cycles.
    fn build(&self, i: usize, path: &mut Vec<usize>) -> Value {
        let record = &self.records[i];
        path.push(i);

        let mut kids = Container::new();
        let linked = self
            .children
            .get(&id_text(&record.id))
            .map(Vec::as_slice)
            .unwrap_or_default();
        for &child in linked {
            if path.contains(&child) {
                tracing::warn!(id = %record.id, "skipping cyclic parent link");
                continue;
            }
            kids.push(self.build(child, path));
        }
        path.pop();

        let mut value = record.value.clone();
        if let Some(fields) = value.as_indexable_mut() {
            fields.set(self.key.clone(), Value::Map(kids));
        }
        value
    }
}
