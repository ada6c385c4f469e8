//! Keys, containers and objects through the `IndexableContainer` capability.

use hashpath::{Container, IndexableContainer, Key, Object, Value};

use crate::helpers::*;

#[test]
fn test_key_normalization() {
    assert_eq!(Key::from("12"), Key::Int(12));
    assert_eq!(Key::from("-3"), Key::Int(-3));
    assert_eq!(Key::from("012"), Key::Str("012".to_string()));
    assert_eq!(Key::from("-0"), Key::Str("-0".to_string()));
    assert_eq!(Key::from("1.5"), Key::Str("1.5".to_string()));
    assert_eq!(
        Key::from("99999999999999999999"),
        Key::Str("99999999999999999999".to_string())
    );
    assert!(Key::from("1.5").is_numeric());
    assert!(!Key::from("abc").is_numeric());
}

#[test]
fn test_container_push_follows_largest_int_key() {
    let mut c = Container::new();
    c.set(4, "a");
    c.set("x", "b");
    c.push("c");
    assert_eq!(c.get(5), Some(&Value::from("c")));
    assert!(!c.is_list());

    let list = Container::from_list(["a", "b"]);
    assert!(list.is_list());
    assert_eq!(list.next_index(), 2);
}

#[test]
fn test_container_remove_keeps_order() {
    let mut c: Container = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(c.remove("b"), Some(Value::Int(2)));
    let keys: Vec<String> = c.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["a", "c"]);
    assert_eq!(c.remove("missing"), None);
}

#[test]
fn test_indexable_capability_is_shared() {
    let mut native = Container::new();
    native.set("id", 1);
    let mut object = Object::new("Row").with_field("id", 1);

    let views: [&mut dyn IndexableContainer; 2] = [&mut native, &mut object];
    for view in views {
        assert!(view.has(&Key::from("id")));
        assert_eq!(view.keys(), vec![Key::from("id")]);
        view.set(Key::from("name"), Value::from("n"));
        assert_eq!(view.len(), 2);
        assert_eq!(view.remove(&Key::from("id")), Some(Value::Int(1)));
        assert!(!view.is_empty());
    }
}

#[test]
fn test_object_string_form() {
    let row = entity(3, "sara");
    assert_eq!(row.to_text(), Some("sara".to_string()));
    assert_eq!(row.type_name(), "object");

    let plain = Value::Object(Object::new("Row"));
    assert_eq!(plain.to_text(), None);
}

#[test]
fn test_loose_equality() {
    assert!(Value::from("1").loose_eq(&Value::Int(1)));
    assert!(Value::Bool(true).loose_eq(&Value::from("yes")));
    assert!(Value::Null.loose_eq(&Value::Bool(false)));
    assert!(!Value::from("a").loose_eq(&Value::from("b")));
    assert!(
        v(serde_json::json!({"a": 1, "b": "2"})).loose_eq(&v(serde_json::json!({"b": 2, "a": "1"})))
    );
    assert!(!v(serde_json::json!([1])).loose_eq(&Value::Int(1)));
}

#[test]
fn test_empty_values() {
    for empty in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::from("0"),
        Value::map(),
    ] {
        assert!(empty.is_empty_value(), "{empty:?}");
    }
    assert!(!Value::from("0.0").is_empty_value());
    assert!(!entity(1, "x").is_empty_value());
}
