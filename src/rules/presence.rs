//! `present`, `required` and the conditional `required-*` rules.
//!
//! When the pattern matches nothing at all, these rules report at the pattern
//! itself (`user.*.name`), since there is no concrete attribute to name.

use super::{all_parameters, first_parameter};
use crate::compare::{is_filled, loose_contains};
use crate::error::ConfigError;
use crate::overlap::{Correlation, correlate, merge};
use crate::pattern::Pattern;
use crate::primitives::{has, lookup, resolve};
use crate::validator::Validator;
use serde_json::Value;

/// The key exists; its value may be anything, null included.
pub fn present(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    if !has(data, pattern) {
        validator.add_error(pattern, rule);
    }
    Ok(())
}

/// The key exists and every match is filled (not null, `""` or empty).
pub fn required(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    if !has(data, pattern) {
        validator.add_error(pattern, rule);
    }

    for (attribute, value) in resolve(data, pattern) {
        if !is_filled(value) {
            validator.add_error(&attribute, rule);
        }
    }
    Ok(())
}

/// `required-if:field,value1,value2,...`
///
/// Required wherever the correlated field loosely equals one of the values.
pub fn required_if(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let field = first_parameter(pattern, rule, parameters)?;
    let values = &parameters[1..];
    let correlation = correlate(pattern, field)?;
    let joined = values.join(",");

    if !has(data, pattern) {
        // Walk the field instead and name the pattern instance it maps to.
        let target = Pattern::parse(pattern);
        for (field_attribute, field_value) in resolve(data, field) {
            if field_value.is_null() || !loose_contains(values, field_value) {
                continue;
            }

            let attribute = match &correlation {
                Correlation::Literal(_) => pattern.to_string(),
                Correlation::Wildcard { shared, .. } => merge(shared, &field_attribute, &target),
            };
            validator.add_error_with(
                &attribute,
                rule,
                [("field", field_attribute.as_str()), ("value", joined.as_str())],
            );
        }
        return Ok(());
    }

    for (attribute, value) in resolve(data, pattern) {
        let field_attribute = correlation.attribute_for(&attribute);
        let triggered = lookup(data, &field_attribute)
            .is_some_and(|fv| is_filled(fv) && loose_contains(values, fv));
        if !triggered || is_filled(value) {
            continue;
        }

        validator.add_error_with(
            &attribute,
            rule,
            [("field", field_attribute.as_str()), ("value", joined.as_str())],
        );
    }
    Ok(())
}

/// `required-with:field`: required wherever the correlated field is filled.
pub fn required_with(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let field = first_parameter(pattern, rule, parameters)?;
    let correlation = correlate(pattern, field)?;

    if has(data, field) && !has(data, pattern) {
        validator.add_error_with(pattern, rule, [("field", field)]);
    }

    for (attribute, value) in resolve(data, pattern) {
        let field_attribute = correlation.attribute_for(&attribute);
        if !lookup(data, &field_attribute).is_some_and(is_filled) || is_filled(value) {
            continue;
        }

        validator.add_error_with(&attribute, rule, [("field", field_attribute)]);
    }
    Ok(())
}

/// `required-with-all:field1,field2,...`: required when every field is filled.
pub fn required_with_all(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let fields = all_parameters(pattern, rule, parameters)?;
    let correlations = correlate_all(pattern, fields)?;

    let all_filled = |attribute: &str| {
        correlations.iter().all(|c| {
            lookup(data, &c.attribute_for(attribute)).is_some_and(is_filled)
        })
    };

    if !has(data, pattern) {
        // Instances of the most deeply correlated field carry every index the
        // other fields need.
        let deepest = deepest(&correlations);
        if resolve(data, &fields[deepest]).any(|(attribute, _)| all_filled(&attribute)) {
            validator.add_error(pattern, rule);
        }
        return Ok(());
    }

    let missing = resolve(data, pattern)
        .filter(|(attribute, value)| value.is_null() && all_filled(attribute))
        .count();
    for _ in 0..missing {
        validator.add_error(pattern, rule);
    }
    Ok(())
}

/// `required-with-any:field1,field2,...`: required when any field is filled.
pub fn required_with_any(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let fields = all_parameters(pattern, rule, parameters)?;
    let correlations = correlate_all(pattern, fields)?;

    if !has(data, pattern) {
        let required = fields
            .iter()
            .any(|field| resolve(data, field).any(|(_, value)| is_filled(value)));
        if required {
            validator.add_error(pattern, rule);
        }
        return Ok(());
    }

    let missing = resolve(data, pattern)
        .filter(|(attribute, value)| {
            value.is_null()
                && correlations.iter().any(|c| {
                    lookup(data, &c.attribute_for(attribute)).is_some_and(is_filled)
                })
        })
        .count();
    for _ in 0..missing {
        validator.add_error(pattern, rule);
    }
    Ok(())
}

/// `required-without:field`: required wherever the correlated field is not
/// filled.
pub fn required_without(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let field = first_parameter(pattern, rule, parameters)?;
    let correlation = correlate(pattern, field)?;

    if !has(data, field) && !has(data, pattern) {
        validator.add_error_with(pattern, rule, [("field", field)]);
    }

    for (attribute, value) in resolve(data, pattern) {
        if is_filled(value) {
            continue;
        }
        let field_attribute = correlation.attribute_for(&attribute);
        if lookup(data, &field_attribute).is_some_and(is_filled) {
            continue;
        }

        validator.add_error_with(&attribute, rule, [("field", field_attribute)]);
    }
    Ok(())
}

fn correlate_all(pattern: &str, fields: &[String]) -> Result<Vec<Correlation>, ConfigError> {
    fields.iter().map(|field| correlate(pattern, field)).collect()
}

/// Index of the correlation with the longest shared prefix; the first one wins
/// a tie.
fn deepest(correlations: &[Correlation]) -> usize {
    let mut best = 0;
    for (i, c) in correlations.iter().enumerate() {
        if c.depth() > correlations[best].depth() {
            best = i;
        }
    }
    best
}
