use serde::Serialize;
use std::collections::BTreeMap;

/// A rule-set authoring error.
///
/// Raised as soon as the offending rule is evaluated (or the rule set is
/// parsed) and never folded into the validation report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A wildcard field that cannot be correlated to the rule's pattern.
    #[error("cannot match pattern ({pattern}) to field ({field})")]
    UncorrelatedField { pattern: String, field: String },

    #[error("rule '{rule}' on '{pattern}' requires a parameter")]
    MissingParameter { pattern: String, rule: String },

    #[error("rule '{rule}' on '{pattern}' has an invalid parameter '{value}': {message}")]
    InvalidParameter {
        pattern: String,
        rule: String,
        value: String,
        message: String,
    },

    #[error("rule '{rule}' on '{pattern}' has an invalid regular expression: {message}")]
    InvalidRegex {
        pattern: String,
        rule: String,
        message: String,
    },

    #[error("malformed rule set entry for '{pattern}': {message}")]
    MalformedRuleSet { pattern: String, message: String },

    /// Rule-set or message catalog text that does not parse.
    #[error("failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },
}

/// One validation failure, recorded while rules run.
///
/// Replacements stay raw until the report is rendered, so the same records
/// can be rendered against different message catalogs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Concrete attribute, or the pattern itself when nothing matched.
    pub attribute: String,
    pub rule: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub replacements: BTreeMap<String, String>,
}
