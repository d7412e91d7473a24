//! Character class rules. Blank values pass; containers never do.

use crate::compare::{is_blank, scalar_text};
use crate::error::ConfigError;
use crate::primitives::resolve;
use crate::validator::Validator;
use serde_json::Value;

/// Letters only, in any script.
pub fn alpha(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_chars(validator, data, pattern, rule, char::is_alphabetic);
    Ok(())
}

/// Letters and digits.
pub fn alpha_numeric(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_chars(validator, data, pattern, rule, char::is_alphanumeric);
    Ok(())
}

/// Letters, spaces, apostrophes and hyphens: `Mary-Jane O'Neil`.
pub fn human_name(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_chars(validator, data, pattern, rule, |c| {
        c.is_alphabetic() || matches!(c, ' ' | '\'' | '-')
    });
    Ok(())
}

fn check_chars(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    allowed: impl Fn(char) -> bool,
) {
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) {
            continue;
        }
        if scalar_text(value).is_some_and(|text| text.chars().all(&allowed)) {
            continue;
        }
        validator.add_error(&attribute, rule);
    }
}
