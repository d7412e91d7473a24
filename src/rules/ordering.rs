//! `greater-than` and `less-than`.
//!
//! The bound is the single value at the field path, not a correlated
//! instance. A missing or null bound makes the rule a no-op.

use super::first_parameter;
use crate::compare::{is_blank, loose_cmp, scalar_text};
use crate::error::ConfigError;
use crate::primitives::{resolve, resolve_single};
use crate::validator::Validator;
use serde_json::Value;
use std::cmp::Ordering;

pub fn greater_than(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_bound(validator, data, pattern, rule, parameters, Ordering::Greater)
}

pub fn less_than(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_bound(validator, data, pattern, rule, parameters, Ordering::Less)
}

fn compare_with_bound(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
    expected: Ordering,
) -> Result<(), ConfigError> {
    let field = first_parameter(pattern, rule, parameters)?;
    let Some(bound) = resolve_single(data, field).filter(|b| !b.is_null()) else {
        return Ok(());
    };

    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || loose_cmp(value, bound) == Some(expected) {
            continue;
        }
        let text = scalar_text(value).unwrap_or_default();
        validator.add_error_with(&attribute, rule, [("field", field), ("value", text.as_str())]);
    }
    Ok(())
}
