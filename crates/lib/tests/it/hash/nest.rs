//! Building trees from parent-linked records.

use hashpath::{
    Value,
    hash::{self, HashError, NestOptions},
};

use crate::helpers::*;

fn menu() -> Value {
    v(serde_json::json!([
        {"id": 1, "parent_id": null, "name": "Home"},
        {"id": 2, "parent_id": 1, "name": "About"},
        {"id": 3, "parent_id": 1, "name": "Blog"},
        {"id": 4, "parent_id": 3, "name": "2024"},
        {"id": 5, "parent_id": null, "name": "Contact"},
    ]))
}

#[test]
fn test_nest_default_paths() {
    let tree = hash::nest(&menu(), &NestOptions::default()).unwrap();
    assert_eq!(
        hash::extract(&tree, "{n}.name").unwrap(),
        Value::list(["Home", "Contact"])
    );
    assert_eq!(
        hash::extract(&tree, "0.children.{n}.name").unwrap(),
        Value::list(["About", "Blog"])
    );
    assert_eq!(
        hash::extract(&tree, "0.children.1.children.{n}.name").unwrap(),
        Value::list(["2024"])
    );
    assert_eq!(
        hash::get(&tree, "1.children", Value::Null).unwrap(),
        Value::map()
    );
}

#[test]
fn test_nest_children_before_parents() {
    let data = v(serde_json::json!([
        {"id": 3, "parent_id": 1, "name": "late child"},
        {"id": 1, "parent_id": 0, "name": "root"},
    ]));
    let tree = hash::nest(&data, &NestOptions::default()).unwrap();
    assert_eq!(
        hash::extract(&tree, "{n}.children.{n}.name").unwrap(),
        Value::list(["late child"])
    );
}

#[test]
fn test_nest_custom_paths_and_children_key() {
    let data = v(serde_json::json!([
        {"Category": {"id": "a", "parent": ""}},
        {"Category": {"id": "b", "parent": "a"}},
    ]));
    let options = NestOptions::new()
        .with_id_path("{n}.Category.id")
        .with_parent_path("{n}.Category.parent")
        .with_children("items");
    let tree = hash::nest(&data, &options).unwrap();
    assert_eq!(
        hash::extract(&tree, "0.items.{n}.Category.id").unwrap(),
        Value::list(["b"])
    );
}

#[test]
fn test_nest_with_root() {
    let options = NestOptions::default().with_root(3);
    let tree = hash::nest(&menu(), &options).unwrap();
    // Blog is not a root record, so nothing starts at it
    assert_eq!(tree, Value::map());

    let data = v(serde_json::json!([
        {"id": 1, "parent_id": 9, "name": "orphan of 9"},
        {"id": 2, "parent_id": 8, "name": "orphan of 8"},
        {"id": 3, "parent_id": 2, "name": "child"},
    ]));
    let tree = hash::nest(&data, &NestOptions::default().with_root(8)).unwrap();
    assert_eq!(
        hash::extract(&tree, "{n}.name").unwrap(),
        Value::list(["orphan of 8"])
    );
    assert_eq!(
        hash::extract(&tree, "0.children.{n}.name").unwrap(),
        Value::list(["child"])
    );
}

#[test]
fn test_nest_default_root_drops_unrelated_orphans() {
    let data = v(serde_json::json!([
        {"id": 1, "parent_id": null},
        {"id": 2, "parent_id": 99},
    ]));
    let tree = hash::nest(&data, &NestOptions::default()).unwrap();
    assert_eq!(hash::extract(&tree, "{n}.id").unwrap(), Value::list([1]));
}

#[test]
fn test_nest_without_roots_is_an_error() {
    let data = v(serde_json::json!([
        {"id": 1, "parent_id": 2},
        {"id": 2, "parent_id": 1},
    ]));
    let err = hash::nest(&data, &NestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        hashpath::Error::Hash(HashError::InvalidNestData { .. })
    ));
}

#[test]
fn test_nest_empty_input() {
    let tree = hash::nest(&v(serde_json::json!([])), &NestOptions::default()).unwrap();
    assert_eq!(tree, Value::map());
}
