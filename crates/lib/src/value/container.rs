//! Ordered containers and the capability trait the engine traverses through.

use indexmap::IndexMap;

use super::{Key, Value};

/// Map-like access to a nested container.
///
/// The engine never looks at a concrete container type: it reads, writes and
/// iterates through this trait. [`Container`] is the native implementation and
/// [`Object`](super::Object) adapts class-named records.
///
/// Iteration order is the container's native key order.
pub trait IndexableContainer {
    /// Returns the value stored under `key`.
    fn get(&self, key: &Key) -> Option<&Value>;

    /// Returns a mutable reference to the value stored under `key`.
    fn get_mut(&mut self, key: &Key) -> Option<&mut Value>;

    /// Returns true if `key` is present, even if it holds `Null`.
    fn has(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in native order.
    fn keys(&self) -> Vec<Key>;

    /// Iterates over entries in native order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_>;

    /// Iterates mutably over entries in native order.
    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&Key, &mut Value)> + '_>;

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// Existing keys keep their position; new keys are appended.
    fn set(&mut self, key: Key, value: Value) -> Option<Value>;

    /// Removes `key`, returning its value.
    fn remove(&mut self, key: &Key) -> Option<Value>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered map from [`Key`] to [`Value`].
///
/// Insertion order is preserved. A list is a container whose keys are `0..n`.
/// Equality compares entries in order.
///
/// ```
/// # use hashpath::value::{Container, Key, Value};
/// let mut c = Container::new();
/// c.set("b", 1);
/// c.set("a", 2);
/// c.push("appended");
///
/// let keys: Vec<String> = c.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["b", "a", "0"]);
/// assert_eq!(c.get("a"), Some(&Value::Int(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: IndexMap<Key, Value>,
    /// Largest integer key
    max_int: Option<i64>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            max_int: None,
        }
    }

    /// Builds a list keyed `0..n`.
    pub fn from_list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let entries: IndexMap<Key, Value> = items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v.into()))
            .collect();
        let max_int = entries.len().checked_sub(1).map(|n| n as i64);
        Self { entries, max_int }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the value under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        IndexableContainer::get(self, &key.into())
    }

    /// Gets a mutable reference to the value under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        IndexableContainer::get_mut(self, &key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(n) = key {
            self.max_int = Some(self.max_int.map_or(n, |max| max.max(n)));
        }
        self.entries.insert(key, value.into())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        IndexableContainer::remove(self, &key.into())
    }

    /// Appends `value` under the next integer key.
    ///
    /// The next key is one past the largest integer key, or `0` when there is none.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.set(Key::Int(self.next_index()), value);
    }

    /// The key [`Container::push`] would use.
    pub fn next_index(&self) -> i64 {
        self.max_int.map_or(0, |max| max.saturating_add(1))
    }

    fn reindex(&mut self) {
        self.max_int = self.entries.keys().filter_map(Key::as_int).max();
    }

    /// Returns true if the keys are exactly `0..n` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| *k == Key::Int(i as i64))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Consumes the container, returning its values in order.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_values().collect()
    }

    /// Returns the first entry, if any.
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Keeps only the entries for which `f` returns true.
    pub fn retain(&mut self, mut f: impl FnMut(&Key, &Value) -> bool) {
        self.entries.retain(|k, v| f(k, v));
        self.reindex();
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl IndexableContainer for Container {
    fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.entries.iter())
    }

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&Key, &mut Value)> + '_> {
        Box::new(self.entries.iter_mut())
    }

    fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        Container::set(self, key, value)
    }

    fn remove(&mut self, key: &Key) -> Option<Value> {
        let removed = self.entries.shift_remove(key)?;
        if let Key::Int(n) = key
            && Some(*n) == self.max_int
        {
            self.reindex();
        }
        Some(removed)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Container
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut container = Container::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            container.set(k, v);
        }
        container
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
