//! `in`, `not-in`, `contains` and `contains-only`.

use super::all_parameters;
use crate::compare::{is_blank, loose_contains, scalar_text};
use crate::error::ConfigError;
use crate::primitives::resolve;
use crate::validator::Validator;
use serde_json::Value;

/// `in:a,b,c`: loosely equal to one of the listed values. Null is skipped.
pub fn in_list(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let values = all_parameters(pattern, rule, parameters)?;
    check_each(validator, data, pattern, rule, values, |value| {
        value.is_null() || loose_contains(values, value)
    });
    Ok(())
}

/// `not-in:a,b,c`
pub fn not_in_list(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let values = all_parameters(pattern, rule, parameters)?;
    check_each(validator, data, pattern, rule, values, |value| {
        value.is_null() || !loose_contains(values, value)
    });
    Ok(())
}

/// `contains:a,b`: a sequence or map holding every listed value.
pub fn contains(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let values = all_parameters(pattern, rule, parameters)?;
    check_each(validator, data, pattern, rule, values, |value| {
        if is_blank(value) {
            return true;
        }
        let Some(elements) = element_texts(value) else {
            return false;
        };
        values.iter().all(|wanted| elements.contains(wanted))
    });
    Ok(())
}

/// `contains-only:a,b`: a sequence or map whose every element is listed.
pub fn contains_only(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let values = all_parameters(pattern, rule, parameters)?;
    check_each(validator, data, pattern, rule, values, |value| {
        if is_blank(value) {
            return true;
        }
        let Some(elements) = element_texts(value) else {
            return false;
        };
        elements.iter().all(|element| values.contains(element))
    });
    Ok(())
}

fn check_each(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    values: &[String],
    passes: impl Fn(&Value) -> bool,
) {
    let listed = values.join(", ");
    for (attribute, value) in resolve(data, pattern) {
        if !passes(value) {
            validator.add_error_with(&attribute, rule, [("values", listed.as_str())]);
        }
    }
}

/// Text of every element of a container. Nested containers have no text and
/// never match a listed value.
fn element_texts(value: &Value) -> Option<Vec<String>> {
    let elements: Box<dyn Iterator<Item = &Value>> = match value {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => return None,
    };
    Some(
        elements
            .map(|e| scalar_text(e).unwrap_or_default())
            .collect(),
    )
}
