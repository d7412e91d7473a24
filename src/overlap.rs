//! Correlating two wildcard patterns to a common concrete instance.
//!
//! A rule evaluated at `user.0.confirm` for the pattern `user.*.confirm` and
//! referring to the field `user.*.password` must read `user.0.password`. The
//! overlap of the two patterns (`user.*`) says which leading segments of the
//! concrete attribute carry over to the field.
//!
//! Overlap is measured in whole segments. Trimming raw substrings breaks as
//! soon as a literal key contains a `*` or the two patterns share a textual
//! but not a segment prefix (`field` vs `fields.*`).

use crate::error::ConfigError;
use crate::pattern::Pattern;

/// Longest common segment prefix of `a` and `b`, or `None` when the first
/// segments already differ.
///
/// Wildcards only match wildcards, so every wildcard in the result sits at the
/// same position in both patterns.
pub fn overlap(a: &Pattern, b: &Pattern) -> Option<Pattern> {
    let shared = a
        .segments()
        .iter()
        .zip(b.segments())
        .take_while(|(x, y)| x == y)
        .count();

    (shared > 0).then(|| a.prefix(shared))
}

/// Rewrites `field` for the instance described by `attribute`.
///
/// `attribute` is a concrete attribute of a pattern whose overlap with `field`
/// is `shared`. The first `shared.len()` segments are copied from `attribute`;
/// the rest of `field` is kept as written.
pub fn merge(shared: &Pattern, attribute: &str, field: &Pattern) -> String {
    let concrete: Vec<&str> = attribute.split('.').collect();

    field
        .segments()
        .iter()
        .enumerate()
        .map(|(i, seg)| match concrete.get(i) {
            Some(value) if i < shared.len() => *value,
            _ => seg.as_str(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// How a cross-field rule reaches its field from each concrete attribute of
/// its own pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Correlation {
    /// The field has no wildcard and is read as written.
    Literal(String),
    /// The field's wildcards are all inside `shared`.
    Wildcard { shared: Pattern, field: Pattern },
}

impl Correlation {
    /// Concrete field attribute for one concrete attribute of the pattern.
    pub fn attribute_for(&self, attribute: &str) -> String {
        match self {
            Correlation::Literal(field) => field.clone(),
            Correlation::Wildcard { shared, field } => merge(shared, attribute, field),
        }
    }

    /// Length of the shared prefix; zero for a literal field.
    pub fn depth(&self) -> usize {
        match self {
            Correlation::Literal(_) => 0,
            Correlation::Wildcard { shared, .. } => shared.len(),
        }
    }
}

/// Checks that `field` can be addressed from instances of `pattern`.
///
/// A literal field always can. A wildcard field needs an overlap that contains
/// every one of its wildcards; anything else is a rule-set authoring error.
pub fn correlate(pattern: &str, field: &str) -> Result<Correlation, ConfigError> {
    let field_pattern = Pattern::parse(field);
    if !field_pattern.has_wildcard() {
        return Ok(Correlation::Literal(field.to_string()));
    }

    let uncorrelated = || ConfigError::UncorrelatedField {
        pattern: pattern.to_string(),
        field: field.to_string(),
    };

    let shared = overlap(&Pattern::parse(pattern), &field_pattern).ok_or_else(uncorrelated)?;
    if shared.wildcard_count() != field_pattern.wildcard_count() {
        return Err(uncorrelated());
    }

    Ok(Correlation::Wildcard {
        shared,
        field: field_pattern,
    })
}
