//! Path resolution primitives.
//!
//! Shared by the engine and every rule: expanding wildcard patterns against a
//! data tree, fetching a single cross-reference value, and re-addressing the
//! tree with an already concrete attribute.

use crate::pattern::{Pattern, Segment};
use serde_json::Value;

// ─── resolve ────────────────────────────────────────────────────────────────

/// Expands `pattern` against `data`, yielding `(concrete attribute, value)`
/// pairs depth-first in document order.
///
/// Missing keys and missing wildcard parents contribute nothing; absence is
/// for the presence rules to judge, not the matcher.
pub fn resolve<'a>(data: &'a Value, pattern: &str) -> Matches<'a> {
    resolve_pattern(data, &Pattern::parse(pattern))
}

/// Same as [`resolve`] for an already parsed pattern.
pub fn resolve_pattern<'a>(data: &'a Value, pattern: &Pattern) -> Matches<'a> {
    Matches {
        segments: pattern.segments().to_vec(),
        stack: vec![Frame {
            value: data,
            depth: 0,
            path: Vec::new(),
        }],
    }
}

/// Lazy iterator returned by [`resolve`].
pub struct Matches<'a> {
    segments: Vec<Segment>,
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    value: &'a Value,
    depth: usize,
    path: Vec<String>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let Some(segment) = self.segments.get(frame.depth) else {
                return Some((frame.path.join("."), frame.value));
            };

            match segment {
                Segment::Key(key) => {
                    if let Some(child) = child(frame.value, key) {
                        let mut path = frame.path;
                        path.push(key.clone());
                        self.stack.push(Frame {
                            value: child,
                            depth: frame.depth + 1,
                            path,
                        });
                    }
                }
                Segment::Wildcard => {
                    // Pushed in reverse so the lowest index pops first.
                    for (index, child) in indexed_children(frame.value).into_iter().rev() {
                        let mut path = frame.path.clone();
                        path.push(index);
                        self.stack.push(Frame {
                            value: child,
                            depth: frame.depth + 1,
                            path,
                        });
                    }
                }
            }
        }
        None
    }
}

// ─── resolve_single / has / lookup ──────────────────────────────────────────

/// Returns the first value matched by `pattern`, or `None` when nothing
/// matches.
///
/// Used by rules that compare against one other field (`greater-than:field`).
pub fn resolve_single<'a>(data: &'a Value, pattern: &str) -> Option<&'a Value> {
    resolve(data, pattern).next().map(|(_, v)| v)
}

/// True when `pattern` matches at least one attribute. A wildcard pattern over
/// an empty sequence is not present.
pub fn has(data: &Value, pattern: &str) -> bool {
    resolve(data, pattern).next().is_some()
}

/// Addresses `data` with a concrete attribute. Every segment is literal, so a
/// `*` left in the attribute looks up a key named `*`.
pub fn lookup<'a>(data: &'a Value, attribute: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in attribute.split('.') {
        current = child(current, segment)?;
    }
    Some(current)
}

// ─── Tree navigation ────────────────────────────────────────────────────────

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => parse_index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Children addressable by an integer index, in natural order.
fn indexed_children(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map
            .iter()
            .filter(|(k, _)| is_integer_key(k))
            .map(|(k, v)| (k.clone(), v))
            .collect(),
        _ => Vec::new(),
    }
}

/// Canonical non-negative index: `"0"`, `"17"`; not `"007"` or `"+1"`.
fn parse_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

fn is_integer_key(key: &str) -> bool {
    key.parse::<i64>()
        .map(|i| i.to_string() == key)
        .unwrap_or(false)
}
