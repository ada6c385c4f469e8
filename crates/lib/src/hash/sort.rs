//! Sorting lists of records by a shared sub-path.

use std::{cmp::Ordering, iter::Peekable, str::Chars};

use super::{extract_refs, root};
use crate::{
    Result,
    path::PathExpr,
    value::{Container, Value},
};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// How sort values are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Numerically when both values are numeric, as text otherwise
    #[default]
    Regular,
    /// Text, with runs of digits compared by value: `img2 < img10`
    Natural,
    /// As numbers; non-numeric values count as `0`
    Numeric,
    /// As text, bytewise
    String,
    /// As text, case folded first and bytewise on ties
    Locale,
}

/// Options for [`sort`].
///
/// ```
/// # use hashpath::{SortDirection, SortMode, SortOptions};
/// let options = SortOptions::new().descending().with_mode(SortMode::Natural).ignore_case(true);
/// assert_eq!(options.direction, SortDirection::Desc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub direction: SortDirection,
    pub mode: SortMode,
    pub ignore_case: bool,
}

impl SortOptions {
    /// Ascending, regular comparison, case sensitive.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    fn text(&self, value: &Value) -> String {
        let text = value.to_text().unwrap_or_else(|| value.to_string());
        if self.ignore_case {
            text.to_lowercase()
        } else {
            text
        }
    }

    /// Compares two sort values, honoring the direction.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ord = match self.mode {
            SortMode::Numeric => cmp_f64(
                a.as_number().unwrap_or(0.0),
                b.as_number().unwrap_or(0.0),
            ),
            SortMode::Regular => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => cmp_f64(x, y),
                _ => self.text(a).cmp(&self.text(b)),
            },
            SortMode::String => self.text(a).cmp(&self.text(b)),
            SortMode::Natural => natural_cmp(&self.text(a), &self.text(b)),
            SortMode::Locale => {
                let (x, y) = (self.text(a), self.text(b));
                x.to_lowercase()
                    .cmp(&y.to_lowercase())
                    .then_with(|| x.cmp(&y))
            }
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

/// Compares strings in natural order.
///
/// Runs of ASCII digits compare by numeric value, ignoring leading zeros;
/// everything else compares by character.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (da, db) = (take_digits(&mut a), take_digits(&mut b));
                let (ta, tb) = (da.trim_start_matches('0'), db.trim_start_matches('0'));
                let ord = ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a.next();
                b.next();
            }
        }
    }
}

/// Strips a leading wildcard segment, so `{n}.price` and `price` address the
/// same field of each record. A bare wildcard addresses the record itself.
fn relative_path(path: &str) -> &str {
    for wildcard in ["{n}", "{s}", "{*}"] {
        if let Some(rest) = path.strip_prefix(wildcard) {
            if rest.is_empty() {
                return rest;
            }
            if let Some(rest) = rest.strip_prefix('.') {
                return rest;
            }
        }
    }
    path
}

/// Stable-sorts the records of `data` by the value each holds at `path`.
///
/// `path` is relative to each record; a leading `{n}.` is accepted and
/// ignored. Records missing the path sort as `Null`. When `path` matches
/// several values inside a record, the first one is used.
///
/// Numeric-keyed input is returned as a list re-indexed from `0`; string keys
/// are kept.
///
/// ```
/// # use hashpath::{hash, SortOptions, value::Value};
/// let data = Value::from(serde_json::json!([{"v": 3}, {"v": 1}, {"v": 2}]));
/// let sorted = hash::sort(&data, "v", SortOptions::new())?;
/// assert_eq!(sorted, Value::from(serde_json::json!([{"v": 1}, {"v": 2}, {"v": 3}])));
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn sort(data: &Value, path: &str, options: SortOptions) -> Result<Value> {
    let container = root(data)?;
    if container.is_empty() {
        return Ok(Value::map());
    }

    let relative = relative_path(path);
    let expr = (!relative.is_empty()).then(|| PathExpr::parse(relative));
    let numeric = container.iter().all(|(key, _)| key.is_numeric());

    let mut rows: Vec<_> = container
        .iter()
        .map(|(key, record)| {
            let by = match &expr {
                Some(expr) => extract_refs(record, expr)
                    .into_iter()
                    .next()
                    .unwrap_or(&Value::Null),
                None => record,
            };
            (key, record, by)
        })
        .collect();
    rows.sort_by(|a, b| options.compare(a.2, b.2));
    tracing::debug!(path, rows = rows.len(), mode = ?options.mode, "sort");

    let sorted: Container = if numeric {
        Container::from_list(rows.into_iter().map(|(_, record, _)| record.clone()))
    } else {
        rows.into_iter()
            .map(|(key, record, _)| (key.clone(), record.clone()))
            .collect()
    };
    Ok(Value::Map(sorted))
}
