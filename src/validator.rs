//! The validation engine.
//!
//! A [`Validator`] owns a rule registry, the message templates, and the errors
//! accumulated so far. Errors are never cleared implicitly: call
//! [`Validator::reset`] between unrelated validations.

use crate::error::{ConfigError, ErrorRecord};
use crate::message::{MessageCatalog, Messages, Report};
use crate::registry::{Rule, RuleRegistry};
use crate::ruleset::RuleSet;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub struct Validator {
    registry: RuleRegistry,
    messages: Messages,
    errors: Vec<ErrorRecord>,
    prefixes: Vec<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Built-in rules and English messages.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_defaults(), Messages::english())
    }

    /// No rules and no messages; every rule name is skipped until registered.
    pub fn empty() -> Self {
        Self::with_registry(RuleRegistry::new(), Messages::new())
    }

    pub fn with_registry(registry: RuleRegistry, messages: Messages) -> Self {
        Validator {
            registry,
            messages,
            errors: Vec::new(),
            prefixes: Vec::new(),
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    // ─── Configuration ──────────────────────────────────────────────────────

    pub fn add_rule(&mut self, name: &str, rule: impl Rule + 'static) -> &mut Self {
        self.registry.register(name, rule);
        self
    }

    pub fn set_rule_message(&mut self, rule: &str, template: &str) -> &mut Self {
        self.messages.set_rule(rule, template);
        self
    }

    pub fn set_attribute_message(&mut self, attribute: &str, template: &str) -> &mut Self {
        self.messages.set_attribute(attribute, template);
        self
    }

    pub fn load_messages(&mut self, catalog: &MessageCatalog) -> &mut Self {
        self.messages.extend(catalog);
        self
    }

    pub fn load_messages_yaml(&mut self, input: &str) -> Result<&mut Self, ConfigError> {
        let catalog = MessageCatalog::from_yaml(input)?;
        Ok(self.load_messages(&catalog))
    }

    // ─── Validation ─────────────────────────────────────────────────────────

    /// Runs every rule of `rules` against `data`, in rule-set order.
    ///
    /// Returns whether this call recorded any error. Unregistered rule names
    /// are skipped. The first configuration error aborts the call.
    pub fn validate(&mut self, data: &Value, rules: &RuleSet) -> Result<bool, ConfigError> {
        let before = self.errors.len();

        for (pattern, entry) in rules.iter() {
            for spec in entry.specs(pattern)? {
                let Some(rule) = self.registry.lookup(&spec.name) else {
                    debug!(pattern, rule = %spec.name, "skipping unregistered rule");
                    continue;
                };

                trace!(pattern, rule = %spec.name, parameters = ?spec.parameters, "running rule");
                rule.check(self, data, pattern, &spec.name, &spec.parameters)
                    .inspect_err(|e| debug!(pattern, rule = %spec.name, error = %e, "rule set error"))?;
            }
        }

        Ok(self.errors.len() > before)
    }

    /// Like [`validate`](Self::validate) with every reported attribute
    /// qualified by `prefix`. Scopes nest and are popped on return.
    pub fn validate_scoped(
        &mut self,
        data: &Value,
        rules: &RuleSet,
        prefix: &str,
    ) -> Result<bool, ConfigError> {
        self.prefixes.push(prefix.to_string());
        let result = self.validate(data, rules);
        self.prefixes.pop();
        result
    }

    /// Records a failure of `rule` at `attribute`.
    pub fn add_error(&mut self, attribute: &str, rule: &str) {
        self.push_error(attribute, rule, BTreeMap::new());
    }

    /// Records a failure with message replacements, e.g. `[("field", "user.0.password")]`.
    pub fn add_error_with<I, K, V>(&mut self, attribute: &str, rule: &str, replacements: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let replacements = replacements
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.push_error(attribute, rule, replacements);
    }

    fn push_error(&mut self, attribute: &str, rule: &str, replacements: BTreeMap<String, String>) {
        let attribute = self.qualify(attribute);
        trace!(attribute = %attribute, rule, "validation error");
        self.errors.push(ErrorRecord {
            attribute,
            rule: rule.to_string(),
            replacements,
        });
    }

    fn qualify(&self, attribute: &str) -> String {
        self.prefixes
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .chain(std::iter::once(attribute))
            .collect::<Vec<_>>()
            .join(".")
    }

    // ─── Results ────────────────────────────────────────────────────────────

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Clears accumulated errors. Rules and messages are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.errors.clear();
        self
    }

    /// Renders the accumulated errors with the current messages.
    pub fn report(&self) -> Report {
        self.messages.render(&self.errors)
    }
}
