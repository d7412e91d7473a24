//! Rule-based validation of nested JSON-like data addressed by dot paths.
//!
//! Rules are attached to attribute patterns such as `user.*.email`, where `*`
//! matches every key of a sequence or mapping. Each rule runs over every
//! concrete attribute the pattern matches and records an error per failing
//! instance:
//!
//! ```text
//! RuleSet + data → Validator::validate → ErrorRecord* → Report
//! ```
//!
//! Cross-field rules (`equals:user.*.password`) read the field instance that
//! belongs to the same wildcard indices as the attribute being checked.
//!
//! # Quick Start
//!
//! ```rust
//! use dotrules::{RuleSet, Validator};
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .rule("user.*.name", "required|human-name")
//!     .rule("user.*.confirm", "equals:user.*.password");
//!
//! let data = json!({
//!     "user": [
//!         { "name": "Ada", "password": "hunter2", "confirm": "hunter2" },
//!         { "name": "", "password": "a", "confirm": "b" },
//!     ]
//! });
//!
//! let mut validator = Validator::new();
//! validator.validate(&data, &rules).expect("well-formed rule set");
//!
//! let report = validator.report();
//! assert_eq!(report.get("user.1.name", "required"), Some("User 1 name is required"));
//! assert_eq!(
//!     report.get("user.1.confirm", "equals"),
//!     Some("User 1 confirm must equal User 1 password"),
//! );
//! ```

pub mod compare;
pub mod error;
pub mod message;
pub mod overlap;
pub mod pattern;
pub mod primitives;
pub mod registry;
pub mod rules;
pub mod ruleset;
pub mod validator;

pub(crate) mod lang;

pub use error::*;
pub use message::{MessageCatalog, Messages, Report};
pub use pattern::{Pattern, Segment, WILDCARD};
pub use registry::{Rule, RuleRegistry};
pub use ruleset::{RuleEntry, RuleSet, RuleSpec};
pub use validator::Validator;

/// Convenience entry point: validates `data` against `rules` with the built-in
/// rules and English messages.
///
/// Returns the rendered report, empty when the data is valid.
pub fn validate(data: &serde_json::Value, rules: &RuleSet) -> Result<Report, ConfigError> {
    let mut validator = Validator::new();
    validator.validate(data, rules)?;
    Ok(validator.report())
}
