//! Shared helpers for benchmark tests

use hashpath::{Container, Value};

/// Builds a list of `count` article records.
///
/// Each record has the shape
/// `{"Article": {"id", "title", "published"}, "Tag": [{"id", "tag"}, ...]}`
/// with three tags, so wildcard paths fan out one level below the records.
pub fn articles(count: usize) -> Value {
    Value::list((0..count).map(|i| {
        let mut article = Container::new();
        article.set("id", i as i64);
        article.set("title", format!("Article {i}"));
        article.set("published", if i % 2 == 0 { "Y" } else { "N" });

        let tags = Value::list((0..3).map(|t| {
            let mut tag = Container::new();
            tag.set("id", (i * 3 + t) as i64);
            tag.set("tag", format!("tag{t}"));
            Value::Map(tag)
        }));

        let mut record = Container::new();
        record.set("Article", Value::Map(article));
        record.set("Tag", tags);
        Value::Map(record)
    }))
}
