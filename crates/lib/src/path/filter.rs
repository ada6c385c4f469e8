//! Attribute filters: the bracketed predicates of a path segment.
//!
//! A filter compares one direct field of a candidate container:
//!
//! - `[attr]` keeps candidates whose `attr` is present and not empty
//!   (null, `false`, `""` and empty containers count as empty)
//! - `[attr=v]`, `[attr!=v]` compare loosely: numeric text compares as numbers,
//!   booleans read as `1`/`0` against numbers and `true`/`false` otherwise
//! - `[attr>v]`, `[attr>=v]`, `[attr<v]`, `[attr<=v]` order the same way
//! - `[attr=/pattern/flags]` matches the field's string form against a regex
//!   (flags `i`, `m`, `s`, `x`; `u` is accepted and ignored)
//!
//! Fields holding containers satisfy `!=` and no other comparison. Objects are
//! compared through their string form when they have one.

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use super::PathError;
use crate::value::{IndexableContainer, Key, Value, loose_cmp_text, numeric_text};

/// Comparison operator of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::Ne => ordering != Ordering::Equal,
            FilterOp::Gt => ordering == Ordering::Greater,
            FilterOp::Ge => ordering != Ordering::Less,
            FilterOp::Lt => ordering == Ordering::Less,
            FilterOp::Le => ordering != Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone)]
enum Pattern {
    Valid(Regex),
    Invalid,
}

/// A single bracket filter.
#[derive(Debug, Clone)]
pub struct Filter {
    attr: Key,
    op: Option<FilterOp>,
    value: String,
    pattern: Option<Pattern>,
}

impl Filter {
    /// The field this filter reads.
    pub fn attr(&self) -> &Key {
        &self.attr
    }

    /// The operator, or `None` for a presence test.
    pub fn op(&self) -> Option<FilterOp> {
        self.op
    }

    /// The literal operand as written.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the operand is a `/pattern/`.
    pub fn is_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Evaluates the filter against a candidate container.
    pub fn matches(&self, candidate: &dyn IndexableContainer) -> bool {
        let Some(prop) = candidate.get(&self.attr) else {
            return false;
        };
        let Some(op) = self.op else {
            return is_present(prop);
        };
        // A container never equals a literal, so only `!=` can accept one
        if let Value::Map(_) = prop {
            return op == FilterOp::Ne && self.pattern.is_none();
        }
        let Some(text) = comparable_text(prop, &self.value) else {
            return false;
        };

        match &self.pattern {
            Some(Pattern::Valid(re)) => re.is_match(&text),
            Some(Pattern::Invalid) => false,
            None => op.accepts(loose_cmp_text(&text, &self.value)),
        }
    }
}

fn is_present(prop: &Value) -> bool {
    match prop {
        Value::Null | Value::Bool(false) => false,
        Value::Text(s) => !s.is_empty(),
        Value::Map(c) => !c.is_empty(),
        _ => true,
    }
}

fn comparable_text(prop: &Value, operand: &str) -> Option<String> {
    match prop {
        Value::Bool(b) if numeric_text(operand).is_some() => {
            Some(if *b { "1" } else { "0" }.to_string())
        }
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Map(_) => None,
        other => other.to_text(),
    }
}

enum ScanError {
    Unterminated,
    Invalid { filter: String, reason: String },
}

/// Parses the bracket filters that follow a segment's key.
///
/// Filters that cannot be parsed are skipped and reported in the error list;
/// callers evaluating permissively ignore those errors.
pub(crate) fn parse_filters(segment: &str, conditions: &str) -> (Vec<Filter>, Vec<PathError>) {
    let mut filters = Vec::new();
    let mut errors = Vec::new();
    let mut rest = conditions;

    while let Some(open) = rest.find('[') {
        let body = &rest[open + 1..];
        match scan_filter(body) {
            Ok((filter, consumed)) => {
                if let Some(Pattern::Invalid) = filter.pattern {
                    errors.push(PathError::InvalidPattern {
                        pattern: filter.value.clone(),
                        reason: "not a valid regular expression".to_string(),
                    });
                }
                filters.push(filter);
                rest = &body[consumed..];
            }
            Err(ScanError::Unterminated) => {
                errors.push(PathError::UnterminatedFilter {
                    segment: segment.to_string(),
                });
                break;
            }
            Err(ScanError::Invalid { filter, reason }) => {
                errors.push(PathError::InvalidFilter {
                    segment: segment.to_string(),
                    filter,
                    reason,
                });
                match body.find(']') {
                    Some(close) => rest = &body[close + 1..],
                    None => break,
                }
            }
        }
    }

    (filters, errors)
}

/// Scans one filter body (after `[`), returning the filter and the number of
/// bytes consumed including the closing `]`.
fn scan_filter(body: &str) -> Result<(Filter, usize), ScanError> {
    let attr_end = body
        .find(|c| matches!(c, '=' | '!' | '<' | '>' | ']'))
        .ok_or(ScanError::Unterminated)?;
    let attr = body[..attr_end].trim();
    if attr.is_empty() {
        return Err(ScanError::Invalid {
            filter: body.split(']').next().unwrap_or_default().to_string(),
            reason: "missing attribute name".to_string(),
        });
    }

    let tail = &body[attr_end..];
    if tail.starts_with(']') {
        let filter = Filter {
            attr: Key::parse(attr),
            op: None,
            value: String::new(),
            pattern: None,
        };
        return Ok((filter, attr_end + 1));
    }

    let (op, op_len) = if tail.starts_with("!=") {
        (FilterOp::Ne, 2)
    } else if tail.starts_with(">=") {
        (FilterOp::Ge, 2)
    } else if tail.starts_with("<=") {
        (FilterOp::Le, 2)
    } else if tail.starts_with('=') {
        (FilterOp::Eq, 1)
    } else if tail.starts_with('>') {
        (FilterOp::Gt, 1)
    } else if tail.starts_with('<') {
        (FilterOp::Lt, 1)
    } else {
        return Err(ScanError::Invalid {
            filter: body.split(']').next().unwrap_or_default().to_string(),
            reason: "expected '=' after '!'".to_string(),
        });
    };

    let after_op = &body[attr_end + op_len..];
    let trimmed = after_op.trim_start();
    let value_offset = attr_end + op_len + (after_op.len() - trimmed.len());

    let value_len = match pattern_end(trimmed) {
        Some(end) if op == FilterOp::Eq => end,
        _ => trimmed.find(']').ok_or(ScanError::Unterminated)?,
    };
    let value = &trimmed[..value_len];
    if value.is_empty() {
        return Err(ScanError::Invalid {
            filter: format!("{attr}{}", op.as_str()),
            reason: "missing value".to_string(),
        });
    }

    let pattern = (op == FilterOp::Eq && value.starts_with('/')).then(|| compile_pattern(value));
    let filter = Filter {
        attr: Key::parse(attr),
        op: Some(op),
        value: value.to_string(),
        pattern,
    };
    Ok((filter, value_offset + value_len + 1))
}

/// Finds the end of a `/pattern/flags` operand that is followed by `]`.
fn pattern_end(s: &str) -> Option<usize> {
    if !s.starts_with('/') {
        return None;
    }
    s.match_indices('/').skip(1).find_map(|(j, _)| {
        let after = &s[j + 1..];
        let flags = after.bytes().take_while(u8::is_ascii_alphabetic).count();
        after[flags..].starts_with(']').then_some(j + 1 + flags)
    })
}

fn compile_pattern(value: &str) -> Pattern {
    let Some(last) = value.rfind('/').filter(|&i| i > 0) else {
        tracing::warn!(pattern = value, "filter pattern has no closing delimiter");
        return Pattern::Invalid;
    };
    let source = &value[1..last];
    let flags = &value[last + 1..];

    let built = RegexBuilder::new(source)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .ignore_whitespace(flags.contains('x'))
        .build();
    match built {
        Ok(re) => Pattern::Valid(re),
        Err(err) => {
            tracing::warn!(pattern = value, error = %err, "invalid filter pattern never matches");
            Pattern::Invalid
        }
    }
}
