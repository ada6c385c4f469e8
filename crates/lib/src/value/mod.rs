//! Value types for nested data.
//!
//! This module provides the [`Value`] enum that represents everything a nested
//! structure can hold. Values are either scalars (null, booleans, numbers, text)
//! or containers ([`Container`] and [`Object`]). Containers implement
//! [`IndexableContainer`], which is the only view of the data the engine in
//! [`crate::hash`] relies on.

use std::{cmp::Ordering, fmt};

pub mod container;
mod json;
pub mod key;
pub mod object;

pub use container::{Container, IndexableContainer};
pub use key::Key;
pub use object::Object;

/// Values that can be stored in nested containers.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use hashpath::value::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered container (maps and lists)
    Map(Container),
    /// Record with map-like field access
    Object(Object),
}

impl Value {
    /// Creates an empty map.
    pub fn map() -> Self {
        Value::Map(Container::new())
    }

    /// Creates a list keyed `0..n`.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Map(Container::from_list(items))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for null, booleans, numbers and text.
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true for values the engine can traverse into.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Object(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Container> {
        match self {
            Value::Map(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Map(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Map-like view of a container value.
    pub fn as_indexable(&self) -> Option<&dyn IndexableContainer> {
        match self {
            Value::Map(c) => Some(c),
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable map-like view of a container value.
    pub fn as_indexable_mut(&mut self) -> Option<&mut dyn IndexableContainer> {
        match self {
            Value::Map(c) => Some(c),
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Numeric reading of the value: numbers, and text holding a decimal number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => numeric_text(s),
            _ => None,
        }
    }

    /// Returns true for ints, floats and numeric text.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// String form of a scalar, or of an object that has one.
    ///
    /// Null reads as `""`, booleans as `"1"`/`""` and floats without a trailing `.0`
    /// when integral. Maps and objects without a string form have none.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(f) => Some(format_float(*f)),
            Value::Text(s) => Some(s.clone()),
            Value::Map(_) => None,
            Value::Object(o) => o.display().map(str::to_string),
        }
    }

    /// Returns true for values considered empty: null, false, zero, `""`, `"0"`
    /// and empty containers.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Text(s) => s.is_empty() || s == "0",
            Value::Map(c) => c.is_empty(),
            Value::Object(_) => false,
        }
    }

    /// Loose equality: numbers compare numerically across ints, floats and
    /// numeric text; null equals every empty scalar; booleans compare by
    /// truthiness; containers compare entry by entry regardless of order.
    ///
    /// ```
    /// # use hashpath::value::Value;
    /// assert!(Value::Int(1).loose_eq(&Value::from("1")));
    /// assert!(Value::Float(2.0).loose_eq(&Value::Int(2)));
    /// assert!(Value::Null.loose_eq(&Value::from("")));
    /// assert!(!Value::from("abc").loose_eq(&Value::Int(0)));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, v) | (v, Value::Null) => match v {
                Value::Map(c) => c.is_empty(),
                Value::Object(_) => false,
                Value::Text(s) => s.is_empty(),
                scalar => scalar.is_empty_value(),
            },
            (Value::Bool(b), v) | (v, Value::Bool(b)) => *b == !v.is_empty_value(),
            (Value::Map(a), Value::Map(b)) => containers_loose_eq(a, b),
            (Value::Object(a), Value::Object(b)) => {
                a.class() == b.class() && containers_loose_eq(a.fields(), b.fields())
            }
            (Value::Map(_) | Value::Object(_), _) | (_, Value::Map(_) | Value::Object(_)) => false,
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => a.to_text() == b.to_text(),
            },
        }
    }
}

fn containers_loose_eq(a: &Container, b: &Container) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(k, v)| b.get(k).is_some_and(|other| v.loose_eq(other)))
}

/// Parses text holding a decimal number, allowing surrounding whitespace.
///
/// Named values such as `inf` or `NaN` are not numbers here.
pub(crate) fn numeric_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || !trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        || !trimmed.bytes().any(|b| b.is_ascii_digit())
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a float the way it reads as a key or text: integral values drop `.0`.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}

/// Compares two strings numerically when both hold numbers, bytewise otherwise.
pub(crate) fn loose_cmp_text(a: &str, b: &str) -> Ordering {
    match (numeric_text(a), numeric_text(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Text(s) => f.write_str(s),
            Value::Map(_) | Value::Object(_) => {
                let json = serde_json::Value::from(self);
                write!(f, "{json}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Map(c)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::Text(s),
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::Text(s) if s == *other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
