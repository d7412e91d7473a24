//! `is:<type>`

use super::first_parameter;
use crate::compare::is_numeric;
use crate::error::ConfigError;
use crate::primitives::resolve;
use crate::validator::Validator;
use serde_json::Value;

type TypeCheck = fn(&Value) -> bool;

static TYPES: &[(&str, TypeCheck)] = &[
    ("array", Value::is_array),
    ("bool", Value::is_boolean),
    ("boolean", Value::is_boolean),
    ("float", Value::is_f64),
    ("double", Value::is_f64),
    ("int", is_integer),
    ("integer", is_integer),
    ("long", is_integer),
    ("numeric", is_numeric),
    ("string", Value::is_string),
    ("scalar", is_scalar),
    ("null", Value::is_null),
    ("iterable", is_container),
    ("countable", is_container),
    ("object", Value::is_object),
];

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn is_container(value: &Value) -> bool {
    value.is_array() || value.is_object()
}

/// The named type predicate, if `name` is known.
pub fn type_check(name: &str) -> Option<TypeCheck> {
    TYPES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, check)| *check)
}

/// Null passes; use `required` or `is:null` to constrain it.
pub fn is(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let name = first_parameter(pattern, rule, parameters)?;
    let check = type_check(name).ok_or_else(|| ConfigError::InvalidParameter {
        pattern: pattern.to_string(),
        rule: rule.to_string(),
        value: name.to_string(),
        message: "unknown type".to_string(),
    })?;

    for (attribute, value) in resolve(data, pattern) {
        if value.is_null() || check(value) {
            continue;
        }
        validator.add_error_with(&attribute, rule, [("type", name)]);
    }
    Ok(())
}
