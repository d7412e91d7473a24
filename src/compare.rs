//! Value semantics shared by the built-in rules.
//!
//! Form and API payloads routinely carry numbers as strings, so the equality
//! and ordering used by `equals`, `in`, `min`, `greater-than` and friends is
//! loose: `"1"` equals `1`, `"10"` orders after `"9"`. The `identical` family
//! uses [`strict_eq`] instead.

use serde_json::Value;
use std::cmp::Ordering;

/// True unless the value is null, the empty string, or an empty container.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Blank values are skipped by most per-value rules: null, `false`, zero,
/// `""`, `"0"`, and empty containers.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Like [`is_blank`] but keeps zero (`0`, `"0"`, `false`) as a real value.
///
/// Used by the numeric bound rules, where `0` must still be checked.
pub fn is_void(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub fn truthy(value: &Value) -> bool {
    !is_blank(value)
}

/// Numeric reading of a number or a numeric string (`"42"`, `" 1.5"`, `"1e3"`).
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

pub fn is_numeric(value: &Value) -> bool {
    as_number(value).is_some()
}

fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    if body.is_empty()
        || !body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Text form of a scalar. Containers and null have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Element count of a sequence or map.
pub fn count(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Exact type and value equality.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// Type-coercing equality.
///
/// - booleans compare against the other side's truthiness;
/// - null equals the empty string and any other blank value;
/// - numbers and numeric strings compare numerically;
/// - containers compare element-wise with the same rules.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == truthy(other),
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !truthy(other),
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match parse_numeric(s) {
                Some(f) => n.as_f64() == Some(f),
                None => n.to_string() == *s,
            }
        }
        (Value::String(x), Value::String(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(fx), Some(fy)) => fx == fy,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| loose_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|other| loose_eq(v, other)))
        }
        _ => false,
    }
}

/// Type-coercing ordering. `None` when the two sides are not comparable
/// (a container against a scalar).
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x.partial_cmp(&y);
    }

    match (a, b) {
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => {
            count(a).zip(count(b)).map(|(x, y)| x.cmp(&y))
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => None,
        (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
            Some(truthy(a).cmp(&truthy(b)))
        }
        _ => {
            let x = scalar_text(a)?;
            let y = scalar_text(b)?;
            Some(x.cmp(&y))
        }
    }
}

/// Loose membership, as used by `in`/`not-in`.
pub fn loose_contains(haystack: &[String], needle: &Value) -> bool {
    haystack
        .iter()
        .any(|candidate| loose_eq(needle, &Value::String(candidate.clone())))
}
