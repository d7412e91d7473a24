//! `equals`, `not-equals`, `identical` and `not-identical`.
//!
//! Each instance is compared with the correlated instance of the field. A
//! field that does not exist compares as null.

use super::{NULL, first_parameter};
use crate::compare::{loose_eq, strict_eq};
use crate::error::ConfigError;
use crate::overlap::correlate;
use crate::primitives::{lookup, resolve};
use crate::validator::Validator;
use serde_json::Value;

pub fn equals(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_field(validator, data, pattern, rule, parameters, loose_eq)
}

pub fn not_equals(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_field(validator, data, pattern, rule, parameters, |a, b| !loose_eq(a, b))
}

pub fn identical(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_field(validator, data, pattern, rule, parameters, strict_eq)
}

pub fn not_identical(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    compare_with_field(validator, data, pattern, rule, parameters, |a, b| !strict_eq(a, b))
}

fn compare_with_field(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
    passes: impl Fn(&Value, &Value) -> bool,
) -> Result<(), ConfigError> {
    let field = first_parameter(pattern, rule, parameters)?;
    let correlation = correlate(pattern, field)?;

    for (attribute, value) in resolve(data, pattern) {
        let field_attribute = correlation.attribute_for(&attribute);
        let field_value = lookup(data, &field_attribute).unwrap_or(&NULL);
        if passes(value, field_value) {
            continue;
        }

        validator.add_error_with(&attribute, rule, [("field", field_attribute)]);
    }
    Ok(())
}
