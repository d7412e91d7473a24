//! Rule registry: rule names to rule implementations.

use crate::error::ConfigError;
use crate::rules;
use crate::validator::Validator;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named check over every attribute matched by a pattern.
///
/// Rules report data failures through [`Validator::add_error`] and return
/// `Err` only for rule-set authoring mistakes.
pub trait Rule: Send + Sync {
    fn check(
        &self,
        validator: &mut Validator,
        data: &Value,
        pattern: &str,
        rule: &str,
        parameters: &[String],
    ) -> Result<(), ConfigError>;
}

impl<F> Rule for F
where
    F: Fn(&mut Validator, &Value, &str, &str, &[String]) -> Result<(), ConfigError> + Send + Sync,
{
    fn check(
        &self,
        validator: &mut Validator,
        data: &Value,
        pattern: &str,
        rule: &str,
        parameters: &[String],
    ) -> Result<(), ConfigError> {
        self(validator, data, pattern, rule, parameters)
    }
}

/// Signature shared by the built-in rules.
pub type RuleFn = fn(&mut Validator, &Value, &str, &str, &[String]) -> Result<(), ConfigError>;

/// The built-in rules, in catalog order.
pub static BUILTIN_RULES: &[(&str, RuleFn)] = &[
    ("present", rules::presence::present),
    ("required", rules::presence::required),
    ("required-if", rules::presence::required_if),
    ("required-with", rules::presence::required_with),
    ("required-with-all", rules::presence::required_with_all),
    ("required-with-any", rules::presence::required_with_any),
    ("required-without", rules::presence::required_without),
    ("equals", rules::equality::equals),
    ("not-equals", rules::equality::not_equals),
    ("identical", rules::equality::identical),
    ("not-identical", rules::equality::not_identical),
    ("in", rules::membership::in_list),
    ("not-in", rules::membership::not_in_list),
    ("contains", rules::membership::contains),
    ("contains-only", rules::membership::contains_only),
    ("min-arr-count", rules::size::min_arr_count),
    ("max-arr-count", rules::size::max_arr_count),
    ("min", rules::size::min),
    ("max", rules::size::max),
    ("greater-than", rules::ordering::greater_than),
    ("less-than", rules::ordering::less_than),
    ("alpha", rules::chars::alpha),
    ("alpha-numeric", rules::chars::alpha_numeric),
    ("min-str-len", rules::size::min_str_len),
    ("max-str-len", rules::size::max_str_len),
    ("str-len", rules::size::str_len),
    ("human-name", rules::chars::human_name),
    ("is", rules::types::is),
    ("email", rules::format::email),
    ("date", rules::format::date),
    ("url", rules::format::url),
    ("uuid", rules::format::uuid),
    ("card-number", rules::format::card_number),
    ("regex", rules::format::regex),
    ("not-regex", rules::format::not_regex),
];

/// Maps rule names to implementations. Cloning shares the implementations.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// An empty registry. Every rule name is a lookup miss.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every entry of [`BUILTIN_RULES`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, rule) in BUILTIN_RULES {
            registry.register(name, *rule);
        }
        registry
    }

    /// Registers `rule` under `name`, replacing any previous rule of that name.
    pub fn register(&mut self, name: &str, rule: impl Rule + 'static) {
        self.rules.insert(name.to_string(), Arc::new(rule));
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}
