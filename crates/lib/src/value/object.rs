//! Class-named records with map-like field access.

use super::{Container, IndexableContainer, Key, Value};

/// A record exposing its fields through [`IndexableContainer`].
///
/// Objects stand in for values that are not plain containers but still allow
/// keyed access to their fields, such as entities loaded from a store. An object
/// may carry a string form; attribute filters use it when the object itself is
/// compared against a literal or a pattern.
///
/// ```
/// # use hashpath::value::{Object, Value};
/// let author = Object::new("Author")
///     .with_field("id", 1)
///     .with_field("name", "mariano")
///     .with_display("mariano");
///
/// assert_eq!(author.class(), "Author");
/// assert_eq!(author.field("name"), Some(&Value::from("mariano")));
/// assert_eq!(author.display(), Some("mariano"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: String,
    fields: Container,
    display: Option<String>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Container::new(),
            display: None,
        }
    }

    /// Wraps existing fields.
    pub fn from_fields(class: impl Into<String>, fields: Container) -> Self {
        Self {
            class: class.into(),
            fields,
            display: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.set(key, value);
        self
    }

    /// Sets the string form of the object.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn field(&self, key: impl Into<Key>) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Container {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Container {
        &mut self.fields
    }

    pub fn into_fields(self) -> Container {
        self.fields
    }

    /// The string form of the object, if it has one.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

impl IndexableContainer for Object {
    fn get(&self, key: &Key) -> Option<&Value> {
        IndexableContainer::get(&self.fields, key)
    }

    fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        IndexableContainer::get_mut(&mut self.fields, key)
    }

    fn keys(&self) -> Vec<Key> {
        IndexableContainer::keys(&self.fields)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        IndexableContainer::iter(&self.fields)
    }

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = (&Key, &mut Value)> + '_> {
        IndexableContainer::iter_mut(&mut self.fields)
    }

    fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        self.fields.set(key, value)
    }

    fn remove(&mut self, key: &Key) -> Option<Value> {
        IndexableContainer::remove(&mut self.fields, key)
    }

    fn len(&self) -> usize {
        self.fields.len()
    }
}
