//! Built-in rules.
//!
//! Every rule has the [`RuleFn`](crate::registry::RuleFn) signature. Most
//! ignore blank values and leave absence to the presence family. Cross-field
//! rules correlate their field with [`correlate`](crate::overlap::correlate)
//! before reading any data.
//!
//! The count, length and numeric bound rules stop at the first instance that
//! passes; every other rule checks each instance independently.

pub mod chars;
pub mod equality;
pub mod format;
pub mod membership;
pub mod ordering;
pub mod presence;
pub mod size;
pub mod types;

use crate::error::ConfigError;
use serde_json::Value;

/// Stand-in for a field that does not exist.
pub(crate) static NULL: Value = Value::Null;

/// First parameter, which must be present and non-empty.
pub(crate) fn first_parameter<'a>(
    pattern: &str,
    rule: &str,
    parameters: &'a [String],
) -> Result<&'a str, ConfigError> {
    match parameters.first() {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(ConfigError::MissingParameter {
            pattern: pattern.to_string(),
            rule: rule.to_string(),
        }),
    }
}

/// First parameter parsed as a non-negative count or length.
pub(crate) fn count_parameter(
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<usize, ConfigError> {
    let raw = first_parameter(pattern, rule, parameters)?;
    raw.parse().map_err(|_| ConfigError::InvalidParameter {
        pattern: pattern.to_string(),
        rule: rule.to_string(),
        value: raw.to_string(),
        message: "expected a non-negative integer".to_string(),
    })
}

/// Every parameter, or an error when there are none.
pub(crate) fn all_parameters<'a>(
    pattern: &str,
    rule: &str,
    parameters: &'a [String],
) -> Result<&'a [String], ConfigError> {
    first_parameter(pattern, rule, parameters)?;
    Ok(parameters)
}
