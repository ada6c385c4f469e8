//! Combining parallel extractions into keyed maps.

use hashpath::{
    Value,
    hash::{self, CombineSpec, HashError, PathSpec},
};

use crate::helpers::*;

#[test]
fn test_combine_keys_only() {
    let data = articles();
    assert_eq!(
        hash::combine(&data, "{n}.User.id", None, None).unwrap(),
        v(serde_json::json!({"1": null, "2": null, "3": null}))
    );
}

#[test]
fn test_combine_keys_and_values() {
    let data = articles();
    assert_eq!(
        hash::combine(&data, "{n}.Article.id", Some("{n}.Article.title"), None).unwrap(),
        v(serde_json::json!({
            "1": "First Article",
            "2": "Second Article",
            "3": "Third Article",
        }))
    );
}

#[test]
fn test_combine_values_are_containers() {
    let data = articles();
    let out = hash::combine(&data, "{n}.User.id", Some("{n}.User"), None).unwrap();
    assert_eq!(
        hash::get(&out, "2.user", Value::Null).unwrap(),
        "mariano"
    );
}

#[test]
fn test_combine_grouped() {
    let data = v(serde_json::json!([
        {"User": {"id": 2, "group_id": 1, "name": "mariano"}},
        {"User": {"id": 14, "group_id": 2, "name": "phpnut"}},
        {"User": {"id": 25, "group_id": 1, "name": "gwoo"}},
        {"User": {"id": 28, "group_id": 2, "name": "nate"}},
    ]));
    let out = hash::combine(
        &data,
        "{n}.User.id",
        Some("{n}.User.name"),
        Some("{n}.User.group_id"),
    )
    .unwrap();
    assert_eq!(
        out,
        v(serde_json::json!({
            "1": {"2": "mariano", "25": "gwoo"},
            "2": {"14": "phpnut", "28": "nate"},
        }))
    );
}

#[test]
fn test_combine_group_shorter_than_keys_uses_group_zero() {
    let data = v(serde_json::json!([
        {"id": 1, "name": "a", "group": "x"},
        {"id": 2, "name": "b"},
    ]));
    let out = hash::combine(&data, "{n}.id", Some("{n}.name"), Some("{n}.group")).unwrap();
    assert_eq!(out, v(serde_json::json!({"x": {"1": "a"}, "0": {"2": "b"}})));
}

#[test]
fn test_combine_length_mismatch_is_an_error() {
    let data = v(serde_json::json!([
        {"id": 1, "name": "a"},
        {"id": 2},
        {"id": 3, "name": "c"},
    ]));
    let err = hash::combine(&data, "{n}.id", Some("{n}.name"), None).unwrap_err();
    assert!(err.is_length_mismatch());
    assert!(matches!(
        err,
        hashpath::Error::Hash(HashError::CombineLengthMismatch { keys: 3, values: 2 })
    ));
}

#[test]
fn test_combine_empty_inputs() {
    let empty = v(serde_json::json!([]));
    assert_eq!(
        hash::combine(&empty, "{n}.id", Some("{n}.name"), None).unwrap(),
        Value::map()
    );

    let data = articles();
    assert_eq!(
        hash::combine(&data, "{n}.Nope", Some("{n}.Article.id"), None).unwrap(),
        Value::map()
    );
}

#[test]
fn test_combine_unmatched_value_path_fills_nulls() {
    let data = articles();
    assert_eq!(
        hash::combine(&data, "{n}.Article.id", Some("{n}.Nope"), None).unwrap(),
        v(serde_json::json!({"1": null, "2": null, "3": null}))
    );
}

#[test]
fn test_combine_duplicate_keys_keep_last_value() {
    let data = v(serde_json::json!([
        {"k": "a", "v": 1},
        {"k": "b", "v": 2},
        {"k": "a", "v": 3},
    ]));
    let out = hash::combine(&data, "{n}.k", Some("{n}.v"), None).unwrap();
    assert_eq!(out, v(serde_json::json!({"a": 3, "b": 2})));
}

#[test]
fn test_combine_with_format_values() {
    let data = articles();
    let spec = CombineSpec::new("{n}.Article.id").with_values(PathSpec::format(
        "%s: %s",
        ["{n}.User.user", "{n}.Article.title"],
    ));
    assert_eq!(
        hash::combine_with(&data, &spec).unwrap(),
        v(serde_json::json!({
            "1": "mariano: First Article",
            "2": "mariano: Second Article",
            "3": "mariano: Third Article",
        }))
    );
}

#[test]
fn test_combine_rejects_scalar_root() {
    let err = hash::combine(&Value::Null, "a", None, None).unwrap_err();
    assert!(err.is_invalid_data_type());
}
