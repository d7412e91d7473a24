//! Count, numeric bound and string length rules.
//!
//! `min-arr-count`, `max-arr-count`, `min`, `max`, `min-str-len` and
//! `max-str-len` stop at the first instance that passes. `str-len` checks
//! every instance.

use super::{count_parameter, first_parameter};
use crate::compare::{count, is_blank, is_void, loose_cmp, scalar_text};
use crate::error::ConfigError;
use crate::primitives::resolve;
use crate::validator::Validator;
use serde_json::Value;
use std::cmp::Ordering;

// ─── Counts ─────────────────────────────────────────────────────────────────

pub fn min_arr_count(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let min = count_parameter(pattern, rule, parameters)?;
    until_first_pass(validator, data, pattern, rule, ("min", parameters[0].as_str()), |value| {
        if value.is_null() {
            return Some(true);
        }
        Some(count(value)? >= min)
    });
    Ok(())
}

pub fn max_arr_count(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let max = count_parameter(pattern, rule, parameters)?;
    until_first_pass(validator, data, pattern, rule, ("max", parameters[0].as_str()), |value| {
        if value.is_null() {
            return Some(true);
        }
        Some(count(value)? <= max)
    });
    Ok(())
}

// ─── Numeric bounds ─────────────────────────────────────────────────────────

/// `min:n`: at least `n`, inclusive. Numeric strings compare as numbers.
pub fn min(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let bound = Value::String(first_parameter(pattern, rule, parameters)?.to_string());
    until_first_pass(validator, data, pattern, rule, ("min", parameters[0].as_str()), |value| {
        if is_void(value) {
            return Some(true);
        }
        Some(loose_cmp(value, &bound)? != Ordering::Less)
    });
    Ok(())
}

/// `max:n`: at most `n`, inclusive.
pub fn max(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let bound = Value::String(first_parameter(pattern, rule, parameters)?.to_string());
    until_first_pass(validator, data, pattern, rule, ("max", parameters[0].as_str()), |value| {
        if is_void(value) {
            return Some(true);
        }
        Some(loose_cmp(value, &bound)? != Ordering::Greater)
    });
    Ok(())
}

// ─── String lengths ─────────────────────────────────────────────────────────

/// `min-str-len:n`, counted in characters.
pub fn min_str_len(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let min = count_parameter(pattern, rule, parameters)?;
    until_first_pass(validator, data, pattern, rule, ("min", parameters[0].as_str()), |value| {
        Some(is_blank(value) || char_len(value)? >= min)
    });
    Ok(())
}

/// `max-str-len:n`
pub fn max_str_len(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let max = count_parameter(pattern, rule, parameters)?;
    until_first_pass(validator, data, pattern, rule, ("max", parameters[0].as_str()), |value| {
        Some(is_blank(value) || char_len(value)? <= max)
    });
    Ok(())
}

/// `str-len:n`: exactly `n` characters, checked on every instance.
pub fn str_len(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let length = count_parameter(pattern, rule, parameters)?;
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || char_len(value) == Some(length) {
            continue;
        }
        validator.add_error_with(&attribute, rule, [("length", parameters[0].as_str())]);
    }
    Ok(())
}

fn char_len(value: &Value) -> Option<usize> {
    scalar_text(value).map(|text| text.chars().count())
}

/// Reports each failing instance until one passes, then stops.
///
/// `passes` returns `None` for values the check cannot apply to, which count
/// as failures.
fn until_first_pass(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    replacement: (&str, &str),
    passes: impl Fn(&Value) -> Option<bool>,
) {
    for (attribute, value) in resolve(data, pattern) {
        if passes(value).unwrap_or(false) {
            break;
        }
        validator.add_error_with(&attribute, rule, [replacement]);
    }
}
