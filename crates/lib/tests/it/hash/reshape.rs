//! Whole-container helpers: flatten/expand, filter, merge and comparisons.

use hashpath::{Container, Value, hash};

use crate::helpers::*;

#[test]
fn test_flatten_articles() {
    let data = v(serde_json::json!([
        {"Post": {"id": "1", "title": "First Post"}, "Author": {"id": "1", "user": "nate"}},
        {"Post": {"id": "2", "title": "Second Post"}, "Author": {"id": "3", "user": "larry"}},
    ]));
    assert_eq!(
        hash::flatten(&data, ".").unwrap(),
        v(serde_json::json!({
            "0.Post.id": "1",
            "0.Post.title": "First Post",
            "0.Author.id": "1",
            "0.Author.user": "nate",
            "1.Post.id": "2",
            "1.Post.title": "Second Post",
            "1.Author.id": "3",
            "1.Author.user": "larry",
        }))
    );
}

#[test]
fn test_flatten_keeps_empty_containers_as_leaves() {
    let data = v(serde_json::json!([{"Post": {"id": 1}, "Author": []}]));
    let flat = hash::flatten(&data, ".").unwrap();
    assert_eq!(
        flat,
        v(serde_json::json!({"0.Post.id": 1, "0.Author": []}))
    );
    assert_eq!(hash::expand(&flat, ".").unwrap(), data);
}

#[test]
fn test_flatten_objects_are_leaves() {
    let data = Value::list([entity(1, "mark")]);
    let flat = hash::flatten(&data, ".").unwrap();
    assert_eq!(flat.as_map().unwrap().get(0), Some(&entity(1, "mark")));
}

#[test]
fn test_flatten_expand_wide_container() {
    let n = 50_000;
    let wide: Container = (0..n)
        .map(|i| (format!("row{i}"), Value::Map([("v", i)].into_iter().collect())))
        .collect();
    let data = Value::Map(wide);

    let flat = hash::flatten(&data, ".").unwrap();
    assert_eq!(flat.as_map().map(Container::len), Some(n as usize));
    assert_eq!(
        hash::get(&flat, ["row49999.v"], Value::Null).unwrap(),
        Value::Int(n - 1)
    );
    assert_eq!(hash::expand(&flat, ".").unwrap(), data);
}

#[test]
fn test_expand_custom_separator() {
    let flat = v(serde_json::json!({"a/b/0": "x", "a/b/1": "y", "c": 1}));
    assert_eq!(
        hash::expand(&flat, "/").unwrap(),
        v(serde_json::json!({"a": {"b": ["x", "y"]}, "c": 1}))
    );
}

#[test]
fn test_expand_later_keys_win() {
    let flat = v(serde_json::json!({"a.b": 1, "a": 2}));
    assert_eq!(hash::expand(&flat, ".").unwrap(), v(serde_json::json!({"a": 2})));
}

#[test]
fn test_flatten_expand_reject_scalars() {
    assert!(hash::flatten(&Value::Int(1), ".").unwrap_err().is_invalid_data_type());
    assert!(hash::expand(&Value::from("a.b"), ".").unwrap_err().is_invalid_data_type());
}

#[test]
fn test_filter_drops_empty_values() {
    let data = v(serde_json::json!({
        "one": "value",
        "zero": 0,
        "zero_text": "0",
        "zero_float": 0.0,
        "empty": "",
        "null": null,
        "false": false,
        "nested": {"empty": [], "kept": true},
        "gone": {"a": null, "b": ""},
    }));
    assert_eq!(
        hash::filter(&data).unwrap(),
        v(serde_json::json!({
            "one": "value",
            "zero": 0,
            "zero_text": "0",
            "zero_float": 0.0,
            "nested": {"kept": true},
        }))
    );
}

#[test]
fn test_filter_with_predicate() {
    let data = v(serde_json::json!({"a": 1, "b": 20, "c": {"d": 30, "e": 2}}));
    let big = hash::filter_with(&data, |value| match value {
        Value::Int(n) => *n >= 10,
        other => other.is_container(),
    })
    .unwrap();
    assert_eq!(big, v(serde_json::json!({"b": 20, "c": {"d": 30}})));
}

#[test]
fn test_merge_recursive() {
    let data = v(serde_json::json!({"Tag": {"name": "red"}, "list": ["a"], "n": 1}));
    let other = v(serde_json::json!({"Tag": {"color": "#f00"}, "list": ["b"], "n": 2}));
    assert_eq!(
        hash::merge(&data, &[other]).unwrap(),
        v(serde_json::json!({
            "Tag": {"name": "red", "color": "#f00"},
            "list": ["a", "b"],
            "n": 2,
        }))
    );
}

#[test]
fn test_merge_appends_integer_keys_and_scalars() {
    let data = v(serde_json::json!(["a", "b"]));
    let merged = hash::merge(
        &data,
        &[v(serde_json::json!(["c"])), Value::from("d"), Value::Null],
    )
    .unwrap();
    assert_eq!(merged, Value::list(["a", "b", "c", "d"]));
}

#[test]
fn test_numeric() {
    assert!(hash::numeric(&v(serde_json::json!([1, "2", 3.5, "-4e2"]))).unwrap());
    assert!(!hash::numeric(&v(serde_json::json!([1, "two"]))).unwrap());
    assert!(!hash::numeric(&v(serde_json::json!([]))).unwrap());
    assert!(!hash::numeric(&v(serde_json::json!([true]))).unwrap());
}

#[test]
fn test_dimensions() {
    assert_eq!(hash::dimensions(&v(serde_json::json!([]))).unwrap(), 0);
    assert_eq!(hash::dimensions(&v(serde_json::json!(["a", "b"]))).unwrap(), 1);
    assert_eq!(
        hash::dimensions(&v(serde_json::json!({"1": "a", "2": {"x": [1]}}))).unwrap(),
        1
    );
    assert_eq!(
        hash::dimensions(&v(serde_json::json!([{"a": {"b": 1}}]))).unwrap(),
        3
    );
}

#[test]
fn test_max_dimensions() {
    assert_eq!(hash::max_dimensions(&v(serde_json::json!([]))).unwrap(), 0);
    assert_eq!(
        hash::max_dimensions(&v(serde_json::json!({"1": "a", "2": {"x": [1]}}))).unwrap(),
        3
    );
    assert_eq!(
        hash::max_dimensions(&v(serde_json::json!([[], [[[]]]]))).unwrap(),
        3
    );
}

#[test]
fn test_map_reduce_apply() {
    let data = users();
    let upper = hash::map(&data, "{n}.name", |name| {
        Value::from(name.as_text().unwrap_or_default().to_uppercase())
    })
    .unwrap();
    assert_eq!(upper, vec![Value::from("MARK"), Value::from("JANE"), Value::from("SARA")]);

    let ids = hash::reduce(
        &data,
        "{n}.id",
        |acc: Vec<i64>, id| {
            let mut acc = acc;
            acc.extend(id.as_int());
            acc
        },
        Vec::new(),
    )
    .unwrap();
    assert_eq!(ids, vec![1, 2, 3]);

    let count = hash::apply(&data, "{n}[active=true]", |rows| rows.len()).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_contains() {
    let data = articles();
    let needle = v(serde_json::json!([{"Article": {"title": "First Article"}}]));
    assert!(hash::contains(&data, &needle).unwrap());

    let needle = v(serde_json::json!([{"Article": {"title": "Nope"}}]));
    assert!(!hash::contains(&data, &needle).unwrap());

    let loose = v(serde_json::json!([{"Article": {"id": 1}}]));
    assert!(hash::contains(&data, &loose).unwrap());

    assert!(!hash::contains(&data, &v(serde_json::json!([]))).unwrap());
    assert!(!hash::contains(&v(serde_json::json!([])), &needle).unwrap());
}

#[test]
fn test_diff() {
    let a = v(serde_json::json!({"0": "a", "1": "b", "k": {"x": 1}}));
    let b = v(serde_json::json!({"0": "a", "1": "c", "k": {"x": "1"}, "z": true}));
    assert_eq!(
        hash::diff(&a, &b).unwrap(),
        v(serde_json::json!({"1": "b", "z": true}))
    );
    assert_eq!(hash::diff(&a, &v(serde_json::json!([]))).unwrap(), a);
    assert_eq!(hash::diff(&v(serde_json::json!([])), &b).unwrap(), b);
}

#[test]
fn test_merge_diff() {
    let data = v(serde_json::json!({"name": "mark", "settings": {"theme": "dark"}}));
    let compare = v(serde_json::json!({
        "name": "other",
        "settings": {"theme": "light", "lang": "en"},
        "age": 41,
    }));
    assert_eq!(
        hash::merge_diff(&data, &compare).unwrap(),
        v(serde_json::json!({
            "name": "mark",
            "settings": {"theme": "dark", "lang": "en"},
            "age": 41,
        }))
    );
    assert_eq!(
        hash::merge_diff(&v(serde_json::json!([])), &compare).unwrap(),
        compare
    );
}

#[test]
fn test_normalize() {
    let data = v(serde_json::json!(["one", "two"]));
    assert_eq!(
        hash::normalize(&data, true).unwrap(),
        v(serde_json::json!({"one": null, "two": null}))
    );
    assert_eq!(hash::normalize(&data, false).unwrap(), data);

    let mixed = v(serde_json::json!({"0": "Tree", "Upload": {"folder": "x"}}));
    assert_eq!(
        hash::normalize(&mixed, false).unwrap(),
        v(serde_json::json!({"Tree": null, "Upload": {"folder": "x"}}))
    );

    let bad = v(serde_json::json!([["nested"]]));
    let err = hash::normalize(&bad, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid key: map at index 0 values cannot be used as keys"
    );
}
