//! Printf-style formatting of parallel extractions.
//!
//! Supported conversions are `%s %d %u %c %f %F %e %E %x %X %o %b` and `%%`.
//! A conversion may carry an argument position (`%2$s`), the flags `-`, `+`,
//! `0`, space and `'c` (custom padding character), a width and a precision.

use super::{extract_values, root};
use crate::{
    Result,
    value::{Value, numeric_text},
};

/// Formats the values found at `paths`, row by row.
///
/// Row `i` formats the `i`-th match of every path through `template`. The
/// number of rows is the number of matches of the first path; paths with
/// fewer matches leave later arguments unset, which render as empty.
///
/// ```
/// # use hashpath::{hash, value::Value};
/// let data = Value::from(serde_json::json!([
///     {"id": 1, "name": "mark", "price": 2.5},
///     {"id": 2, "name": "jane", "price": 10},
/// ]));
/// let rows = hash::format(&data, &["{n}.id", "{n}.name", "{n}.price"], "%03d %s: %.2f")?;
/// assert_eq!(rows, vec!["001 mark: 2.50", "002 jane: 10.00"]);
///
/// let swapped = hash::format(&data, &["{n}.id", "{n}.name"], "%2$s#%1$d")?;
/// assert_eq!(swapped, vec!["mark#1", "jane#2"]);
/// # Ok::<(), hashpath::Error>(())
/// ```
pub fn format<S: AsRef<str>>(data: &Value, paths: &[S], template: &str) -> Result<Vec<String>> {
    root(data)?;
    let columns = paths
        .iter()
        .map(|path| extract_values(data, path.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let rows = columns.first().map_or(0, Vec::len);

    Ok((0..rows)
        .map(|row| {
            let args: Vec<&Value> = columns.iter().filter_map(|c| c.get(row)).collect();
            sprintf(template, &args)
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
struct Conversion {
    position: Option<usize>,
    left: bool,
    plus: bool,
    pad: char,
    width: usize,
    precision: Option<usize>,
    kind: char,
}

impl Default for Conversion {
    fn default() -> Self {
        Self {
            position: None,
            left: false,
            plus: false,
            pad: ' ',
            width: 0,
            precision: None,
            kind: 's',
        }
    }
}

fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parses the conversion following a `%`, returning it and the bytes consumed.
fn parse_conversion(s: &str) -> Option<(Conversion, usize)> {
    let bytes = s.as_bytes();
    let mut conv = Conversion::default();
    let mut i = 0;

    let n = digits(s);
    if n > 0 && bytes.get(n) == Some(&b'$') {
        conv.position = s[..n].parse().ok();
        i = n + 1;
    }

    loop {
        match bytes.get(i) {
            Some(b'-') => conv.left = true,
            Some(b'+') => conv.plus = true,
            Some(b'0') => conv.pad = '0',
            Some(b' ') => conv.pad = ' ',
            Some(b'\'') => {
                let c = s[i + 1..].chars().next()?;
                conv.pad = c;
                i += c.len_utf8();
            }
            _ => break,
        }
        i += 1;
    }

    let n = digits(&s[i..]);
    if n > 0 {
        conv.width = s[i..i + n].parse().ok()?;
        i += n;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let n = digits(&s[i..]);
        conv.precision = Some(if n == 0 { 0 } else { s[i..i + n].parse().ok()? });
        i += n;
    }

    let kind = char::from(*bytes.get(i)?);
    if !"sducfFeExXob".contains(kind) {
        return None;
    }
    conv.kind = kind;
    Some((conv, i + 1))
}

/// Formats `args` through `template`. Missing arguments render as null.
pub(crate) fn sprintf(template: &str, args: &[&Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(at) = rest.find('%') {
        out.push_str(&rest[..at]);
        rest = &rest[at + 1..];
        if let Some(tail) = rest.strip_prefix('%') {
            out.push('%');
            rest = tail;
            continue;
        }
        let Some((conv, used)) = parse_conversion(rest) else {
            out.push('%');
            continue;
        };
        rest = &rest[used..];

        let index = match conv.position {
            Some(position) => position.saturating_sub(1),
            None => {
                next += 1;
                next - 1
            }
        };
        let arg = args.get(index).copied().unwrap_or(&Value::Null);
        out.push_str(&render(&conv, arg));
    }
    out.push_str(rest);
    out
}

fn int_of(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(f) => f.trunc() as i64,
        Value::Bool(b) => i64::from(*b),
        Value::Text(s) => numeric_text(s).map_or(0, |f| f.trunc() as i64),
        Value::Map(c) => i64::from(!c.is_empty()),
        Value::Object(_) => 1,
        Value::Null => 0,
    }
}

fn float_of(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        Value::Text(s) => numeric_text(s).unwrap_or(0.0),
        other => int_of(other) as f64,
    }
}

fn signed(body: String, negative: bool, plus: bool) -> String {
    if !negative && plus {
        format!("+{body}")
    } else {
        body
    }
}

fn render(conv: &Conversion, arg: &Value) -> String {
    let body = match conv.kind {
        's' => {
            let text = arg.to_text().unwrap_or_else(|| arg.to_string());
            match conv.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            }
        }
        'd' => {
            let n = int_of(arg);
            signed(n.to_string(), n < 0, conv.plus)
        }
        'u' => (int_of(arg) as u64).to_string(),
        'c' => u32::try_from(int_of(arg))
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default(),
        'x' => format!("{:x}", int_of(arg)),
        'X' => format!("{:X}", int_of(arg)),
        'o' => format!("{:o}", int_of(arg)),
        'b' => format!("{:b}", int_of(arg)),
        'e' | 'E' => {
            let f = float_of(arg);
            let text = format!("{:.*e}", conv.precision.unwrap_or(6), f);
            // Exponents always carry a sign: 1.5e+3
            let text = match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
                _ => text,
            };
            let text = if conv.kind == 'E' {
                text.to_uppercase()
            } else {
                text
            };
            signed(text, f.is_sign_negative(), conv.plus)
        }
        _ => {
            let f = float_of(arg);
            signed(
                format!("{:.*}", conv.precision.unwrap_or(6), f),
                f.is_sign_negative(),
                conv.plus,
            )
        }
    };
    pad(body, conv)
}

fn pad(body: String, conv: &Conversion) -> String {
    let len = body.chars().count();
    if len >= conv.width {
        return body;
    }
    let fill: String = std::iter::repeat_n(conv.pad, conv.width - len).collect();

    if conv.left {
        return body + &fill;
    }
    if conv.pad == '0'
        && conv.kind != 's'
        && let Some(sign) = body.chars().next().filter(|c| *c == '-' || *c == '+')
    {
        return format!("{sign}{fill}{}", &body[1..]);
    }
    fill + &body
}
