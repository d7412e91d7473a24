//! Message templates and report rendering.
//!
//! Templates use three placeholder sigils:
//!
//! | Sigil            | Renders                                                 |
//! |------------------|---------------------------------------------------------|
//! | `:name`          | the replacement, prettified (`user.*.first_name` → `User first name`) |
//! | `%name`          | the replacement verbatim                                |
//! | `!single\|plural` | `plural` when the error's attribute ends in `*`, else `single` |
//!
//! A template is parsed once into [`Token`]s and rendered in a single pass.

use crate::error::{ConfigError, ErrorRecord};
use crate::pattern::{Pattern, Segment};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Used when neither the attribute nor the rule has a message.
pub const FALLBACK_MESSAGE: &str = ":attribute is invalid";

static FALLBACK_TEMPLATE: LazyLock<Template> = LazyLock::new(|| Template::parse(FALLBACK_MESSAGE));

// ─── Template ───────────────────────────────────────────────────────────────

/// One parsed piece of a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Prettify(String),
    Verbatim(String),
    PluralSelect { singular: String, plural: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn parse(template: &str) -> Self {
        let mut tokens = Vec::new();
        let mut text = String::new();
        let mut rest = template;

        while let Some(c) = rest.chars().next() {
            let after = &rest[c.len_utf8()..];
            let parsed = match c {
                ':' => take_name(after).map(|(name, tail)| (Token::Prettify(name), tail)),
                '%' => take_name(after).map(|(name, tail)| (Token::Verbatim(name), tail)),
                '!' => take_plural(after),
                _ => None,
            };

            match parsed {
                Some((token, tail)) => {
                    if !text.is_empty() {
                        tokens.push(Token::Text(std::mem::take(&mut text)));
                    }
                    tokens.push(token);
                    rest = tail;
                }
                None => {
                    text.push(c);
                    rest = after;
                }
            }
        }
        if !text.is_empty() {
            tokens.push(Token::Text(text));
        }

        Template { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Renders the template for one error record.
    ///
    /// `attribute` always resolves, defaulting to the record's attribute.
    /// Placeholders without a replacement are written back unchanged.
    pub fn render(&self, record: &ErrorRecord) -> String {
        let plural = Pattern::parse(&record.attribute).ends_with_wildcard();

        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Prettify(name) => match replacement(record, name) {
                    Some(value) => out.push_str(&prettify(value)),
                    None => {
                        out.push(':');
                        out.push_str(name);
                    }
                },
                Token::Verbatim(name) => match replacement(record, name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('%');
                        out.push_str(name);
                    }
                },
                Token::PluralSelect { singular, plural: many } => {
                    out.push_str(if plural { many } else { singular });
                }
            }
        }
        out
    }
}

fn replacement<'a>(record: &'a ErrorRecord, name: &str) -> Option<&'a str> {
    match record.replacements.get(name) {
        Some(value) => Some(value),
        None if name == "attribute" => Some(&record.attribute),
        None => None,
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn take_name(input: &str) -> Option<(String, &str)> {
    let end = input.find(|c: char| !is_name_char(c)).unwrap_or(input.len());
    (end > 0).then(|| (input[..end].to_string(), &input[end..]))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

fn take_plural(input: &str) -> Option<(Token, &str)> {
    let mid = input.find(|c: char| !is_word_char(c)).unwrap_or(input.len());
    let after_bar = input[mid..].strip_prefix('|')?;
    let end = after_bar
        .find(|c: char| !is_word_char(c))
        .unwrap_or(after_bar.len());
    if mid == 0 || end == 0 {
        return None;
    }
    Some((
        Token::PluralSelect {
            singular: input[..mid].to_string(),
            plural: after_bar[..end].to_string(),
        },
        &after_bar[end..],
    ))
}

/// Human-readable attribute: wildcard segments dropped, dots and underscores
/// become spaces, first letter uppercased.
pub fn prettify(attribute: &str) -> String {
    let joined = Pattern::parse(attribute)
        .segments()
        .iter()
        .filter_map(|seg| match seg {
            Segment::Key(k) => Some(k.replace('_', " ")),
            Segment::Wildcard => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─── Messages ───────────────────────────────────────────────────────────────

/// Serialized form of a message catalog.
///
/// ```yaml
/// rules:
///   required: ":attribute !is|are required"
/// attributes:
///   terms: "You must accept the terms"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_saphyr::from_str(input).map_err(|e| ConfigError::Parse {
            what: "message catalog",
            message: e.to_string(),
        })?;
        serde_json::from_value(value).map_err(|e| ConfigError::Parse {
            what: "message catalog",
            message: e.to_string(),
        })
    }
}

/// Parsed rule and attribute templates.
#[derive(Clone, Debug, Default)]
pub struct Messages {
    rules: HashMap<String, Template>,
    attributes: HashMap<String, Template>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English rule messages.
    pub fn english() -> Self {
        let mut messages = Self::new();
        for (rule, template) in crate::lang::ENGLISH {
            messages.set_rule(rule, template);
        }
        messages
    }

    pub fn set_rule(&mut self, rule: &str, template: &str) {
        self.rules.insert(rule.to_string(), Template::parse(template));
    }

    /// Message for every error at exactly `attribute`, whatever the rule.
    pub fn set_attribute(&mut self, attribute: &str, template: &str) {
        self.attributes
            .insert(attribute.to_string(), Template::parse(template));
    }

    pub fn extend(&mut self, catalog: &MessageCatalog) {
        for (rule, template) in &catalog.rules {
            self.set_rule(rule, template);
        }
        for (attribute, template) in &catalog.attributes {
            self.set_attribute(attribute, template);
        }
    }

    pub fn template_for(&self, record: &ErrorRecord) -> &Template {
        self.attributes
            .get(&record.attribute)
            .or_else(|| self.rules.get(&record.rule))
            .unwrap_or_else(|| &*FALLBACK_TEMPLATE)
    }

    /// Groups `errors` by attribute, then rule.
    pub fn render(&self, errors: &[ErrorRecord]) -> Report {
        let mut report = Report::default();
        for record in errors {
            let message = self.template_for(record).render(record);
            report.insert(&record.attribute, &record.rule, message);
        }
        report
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Rendered messages for one attribute, in first-seen rule order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMessages {
    pub attribute: String,
    pub messages: Vec<(String, String)>,
}

/// Rendered validation report.
///
/// Serializes to `{"errors": {<attribute>: {<rule>: <message>}}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<AttributeMessages>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[AttributeMessages] {
        &self.entries
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.attribute.as_str())
    }

    pub fn get(&self, attribute: &str, rule: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)?
            .messages
            .iter()
            .find(|(r, _)| r == rule)
            .map(|(_, m)| m.as_str())
    }

    /// A later message for the same attribute and rule replaces the earlier one.
    fn insert(&mut self, attribute: &str, rule: &str, message: String) {
        let index = match self.entries.iter().position(|e| e.attribute == attribute) {
            Some(i) => i,
            None => {
                self.entries.push(AttributeMessages {
                    attribute: attribute.to_string(),
                    messages: Vec::new(),
                });
                self.entries.len() - 1
            }
        };

        let messages = &mut self.entries[index].messages;
        match messages.iter_mut().find(|(r, _)| r == rule) {
            Some(slot) => slot.1 = message,
            None => messages.push((rule.to_string(), message)),
        }
    }

    /// The report as `{"errors": {attribute: {rule: message}}}`.
    pub fn to_value(&self) -> Value {
        // Keys and values are all strings, so serialization cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Rules<'a>(&'a [(String, String)]);

        impl Serialize for Rules<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (rule, message) in self.0 {
                    map.serialize_entry(rule, message)?;
                }
                map.end()
            }
        }

        struct Attributes<'a>(&'a [AttributeMessages]);

        impl Serialize for Attributes<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for entry in self.0 {
                    map.serialize_entry(&entry.attribute, &Rules(&entry.messages))?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("errors", &Attributes(&self.entries))?;
        map.end()
    }
}
