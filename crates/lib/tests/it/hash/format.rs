//! Printf-style formatting of extractions.

use hashpath::{Value, hash};

use crate::helpers::*;

#[test]
fn test_format_rows() {
    let data = articles();
    let rows = hash::format(
        &data,
        &["{n}.User.user", "{n}.User.id"],
        "%s, %s",
    )
    .unwrap();
    assert_eq!(rows, vec!["mariano, 1", "mariano, 2", "mariano, 3"]);
}

#[test]
fn test_format_positional_and_padded() {
    let data = articles();
    let rows = hash::format(
        &data,
        &["{n}.User.user", "{n}.User.id"],
        "%2$04d|%1$-8s|",
    )
    .unwrap();
    assert_eq!(
        rows,
        vec!["0001|mariano |", "0002|mariano |", "0003|mariano |"]
    );
}

#[test]
fn test_format_row_count_follows_first_path() {
    let data = v(serde_json::json!([
        {"a": "x", "b": 1},
        {"a": "y"},
        {"b": 3},
    ]));
    let rows = hash::format(&data, &["{n}.a", "{n}.b"], "%s=%d").unwrap();
    assert_eq!(rows, vec!["x=1", "y=3"]);
}

#[test]
fn test_format_without_paths() {
    let data = articles();
    let rows = hash::format::<&str>(&data, &[], "%s").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_format_rejects_scalar_root() {
    let err = hash::format(&Value::Null, &["a"], "%s").unwrap_err();
    assert!(err.is_invalid_data_type());
}
