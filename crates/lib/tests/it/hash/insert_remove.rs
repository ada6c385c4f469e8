//! Writes: insert and remove over literal and matching paths.

use hashpath::{Value, hash};

use crate::helpers::*;

#[test]
fn test_insert_literal_creates_intermediate_maps() {
    let data = v(serde_json::json!({"pages": {"name": "page"}}));
    let data = hash::insert(data, "files.name", "files").unwrap();
    assert_eq!(
        data,
        v(serde_json::json!({"pages": {"name": "page"}, "files": {"name": "files"}}))
    );

    let data = hash::insert(data, "pages.name", v(serde_json::json!({"a": 1}))).unwrap();
    assert_eq!(
        hash::get(&data, "pages.name.a", Value::Null).unwrap(),
        1
    );
}

#[test]
fn test_insert_replaces_scalars_in_the_way() {
    let data = v(serde_json::json!({"a": "scalar"}));
    let data = hash::insert(data, "a.b.c", true).unwrap();
    assert_eq!(data, v(serde_json::json!({"a": {"b": {"c": true}}})));
}

#[test]
fn test_insert_numeric_keys() {
    let data = v(serde_json::json!([]));
    let data = hash::insert(data, "0.Item.id", 1).unwrap();
    let data = hash::insert(data, "1.Item.id", 2).unwrap();
    assert_eq!(
        data,
        v(serde_json::json!([{"Item": {"id": 1}}, {"Item": {"id": 2}}]))
    );
}

#[test]
fn test_insert_wildcard_writes_every_branch() {
    let data = articles();
    let data = hash::insert(data, "{n}.Article.flagged", false).unwrap();
    assert_eq!(
        hash::extract(&data, "{n}.Article.flagged").unwrap(),
        Value::list([false, false, false])
    );
}

#[test]
fn test_insert_filtered_branches_only() {
    let data = articles();
    let data = hash::insert(data, "{n}[Article.id=2].Article.seen", 1).unwrap();
    // Filters address direct fields only, so a dotted attribute matches nothing
    assert!(!hash::check(&data, "{n}.Article.seen").unwrap());

    let data = v(serde_json::json!([
        {"id": 1, "tags": []},
        {"id": 2, "tags": []},
    ]));
    let data = hash::insert(data, "{n}[id=2].tags", "x").unwrap();
    assert_eq!(
        data,
        v(serde_json::json!([{"id": 1, "tags": []}, {"id": 2, "tags": "x"}]))
    );
}

#[test]
fn test_insert_trailing_wildcard_merges() {
    let data = v(serde_json::json!({"a": {"list": [1, 2], "k": "v"}, "b": "scalar"}));
    let data = hash::insert(data, "{s}", v(serde_json::json!([3]))).unwrap();
    assert_eq!(
        data,
        v(serde_json::json!({"a": {"list": [1, 2], "k": "v", "0": 3}, "b": "scalar"}))
    );

    let data = v(serde_json::json!([[1, 2], [3]]));
    let data = hash::insert(data, "{n}", 9).unwrap();
    assert_eq!(data, v(serde_json::json!([[1, 2, 9], [3, 9]])));
}

#[test]
fn test_insert_under_null_child_creates_map() {
    let data = v(serde_json::json!([{"meta": null}, {"meta": {"x": 1}}]));
    let data = hash::insert(data, "{n}.meta.y", 2).unwrap();
    assert_eq!(
        data,
        v(serde_json::json!([{"meta": {"y": 2}}, {"meta": {"x": 1, "y": 2}}]))
    );
}

#[test]
fn test_insert_rejects_scalar_root() {
    assert!(
        hash::insert(Value::Bool(true), "a", 1)
            .unwrap_err()
            .is_invalid_data_type()
    );
}

#[test]
fn test_remove_literal() {
    let data = v(serde_json::json!({"id": "1", "title": "First"}));
    assert_eq!(
        hash::remove(data, "title").unwrap(),
        v(serde_json::json!({"id": "1"}))
    );
}

#[test]
fn test_remove_is_idempotent() {
    let data = articles();
    let once = hash::remove(data.clone(), "0.Article.title").unwrap();
    let twice = hash::remove(once.clone(), "0.Article.title").unwrap();
    assert_eq!(once, twice);

    let untouched = hash::remove(data.clone(), "0.Nope.deeper").unwrap();
    assert_eq!(untouched, data);
}

#[test]
fn test_remove_wildcard_field() {
    let data = articles();
    let data = hash::remove(data, "{n}.User.password").unwrap();
    assert!(!hash::check(&data, "{n}.User.password").unwrap());
    assert_eq!(
        hash::extract(&data, "{n}.User.user").unwrap(),
        Value::list(["mariano", "mariano", "mariano"])
    );
}

#[test]
fn test_remove_filtered_entries() {
    let data = users();
    let data = hash::remove(data, "{n}[active=false]").unwrap();
    assert_eq!(hash::extract(&data, "{n}.id").unwrap(), Value::list([1, 3]));
}

#[test]
fn test_remove_prunes_emptied_containers() {
    let data = v(serde_json::json!({
        "one": {"Tag": [{"tag": "a"}]},
        "two": {"Tag": [{"tag": "b"}, {"tag": "c", "keep": true}]},
        "three": {"Tag": []},
    }));
    let data = hash::remove(data, "{s}.Tag.{n}[tag=/a|b/]").unwrap();
    assert_eq!(
        data,
        v(serde_json::json!({
            "two": {"Tag": {"1": {"tag": "c", "keep": true}}},
            "three": {"Tag": []},
        }))
    );
}

#[test]
fn test_remove_leaves_scalars_alone() {
    let data = v(serde_json::json!({"a": 1, "b": {"c": 2}}));
    let data = hash::remove(data, "{s}.c").unwrap();
    assert_eq!(data, v(serde_json::json!({"a": 1})));
}

#[test]
fn test_remove_from_objects() {
    let data = Value::list([entity(1, "mark"), entity(2, "jane")]);
    let data = hash::remove(data, "{n}.name").unwrap();
    assert_eq!(
        hash::extract(&data, "{n}.name").unwrap(),
        Value::list(Vec::<Value>::new())
    );
    assert_eq!(hash::extract(&data, "{n}.id").unwrap(), Value::list([1, 2]));
}
