//! Rule sets: which rules apply to which attribute patterns.
//!
//! ```text
//! { "user.*.email": "required|email",
//!   "user.*.code":  ["regex:/^(a|b),\\d+$/"] }
//! ```
//!
//! An entry is either a `|`-delimited string or a list of rule specs. A spec
//! is `name` or `name:p1,p2,...`. Use the list form when a parameter contains
//! `|`.

use crate::error::ConfigError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ─── RuleSpec ───────────────────────────────────────────────────────────────

/// A rule name with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub parameters: Vec<String>,
}

impl RuleSpec {
    /// Parses `name` or `name:p1,p2`. Parameters are trimmed; `name:` yields
    /// a single empty parameter.
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(':') {
            Some((name, params)) => RuleSpec {
                name: name.trim().to_string(),
                parameters: params.split(',').map(|p| p.trim().to_string()).collect(),
            },
            None => RuleSpec {
                name: spec.trim().to_string(),
                parameters: Vec::new(),
            },
        }
    }
}

// ─── RuleEntry ──────────────────────────────────────────────────────────────

/// The rules attached to one pattern, as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Delimited(String),
    List(Vec<String>),
}

impl RuleEntry {
    /// Splits the entry into specs, rejecting empty rule names.
    pub fn specs(&self, pattern: &str) -> Result<Vec<RuleSpec>, ConfigError> {
        let raw: Vec<&str> = match self {
            RuleEntry::Delimited(s) => s.split('|').collect(),
            RuleEntry::List(items) => items.iter().map(String::as_str).collect(),
        };

        raw.into_iter()
            .map(|s| {
                let spec = RuleSpec::parse(s);
                if spec.name.is_empty() {
                    Err(ConfigError::MalformedRuleSet {
                        pattern: pattern.to_string(),
                        message: format!("empty rule name in '{}'", s),
                    })
                } else {
                    Ok(spec)
                }
            })
            .collect()
    }
}

impl From<&str> for RuleEntry {
    fn from(s: &str) -> Self {
        RuleEntry::Delimited(s.to_string())
    }
}

impl From<String> for RuleEntry {
    fn from(s: String) -> Self {
        RuleEntry::Delimited(s)
    }
}

impl From<Vec<&str>> for RuleEntry {
    fn from(items: Vec<&str>) -> Self {
        RuleEntry::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleEntry {
    fn from(items: [&str; N]) -> Self {
        RuleEntry::List(items.into_iter().map(str::to_string).collect())
    }
}

// ─── RuleSet ────────────────────────────────────────────────────────────────

/// Ordered mapping from pattern to rules. Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<(String, RuleEntry)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rules for `pattern`.
    pub fn rule(mut self, pattern: &str, rules: impl Into<RuleEntry>) -> Self {
        self.insert(pattern, rules.into());
        self
    }

    pub fn insert(&mut self, pattern: &str, rules: RuleEntry) {
        match self.entries.iter_mut().find(|(p, _)| p == pattern) {
            Some(slot) => slot.1 = rules,
            None => self.entries.push((pattern.to_string(), rules)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r))
    }

    /// Builds a rule set from a JSON object of `pattern -> string | [string]`.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let map = value.as_object().ok_or_else(|| ConfigError::Parse {
            what: "rule set",
            message: "rule set must be a mapping of pattern to rules".to_string(),
        })?;
        Self::from_map(map)
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(input).map_err(|e| ConfigError::Parse {
            what: "rule set",
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Parses YAML via `serde_json::Value`, so key order is kept.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_saphyr::from_str(input).map_err(|e| ConfigError::Parse {
            what: "rule set",
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    fn from_map(map: &serde_json::Map<String, Value>) -> Result<Self, ConfigError> {
        let mut rules = RuleSet::new();
        for (pattern, entry) in map {
            let entry = RuleEntry::deserialize(entry).map_err(|_| ConfigError::MalformedRuleSet {
                pattern: pattern.clone(),
                message: format!("expected a string or a list of strings, got {}", entry),
            })?;
            rules.insert(pattern, entry);
        }
        Ok(rules)
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, entry) in &self.entries {
            map.serialize_entry(pattern, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        RuleSet::from_map(&map).map_err(serde::de::Error::custom)
    }
}
