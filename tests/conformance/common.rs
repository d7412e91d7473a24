use dotrules::{MessageCatalog, RuleSet, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;

pub fn conformance_dir() -> PathBuf {
    std::env::var("DOTRULES_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub fn load_cases<T: DeserializeOwned>(relative: &str) -> Vec<T> {
    let path = conformance_dir().join(relative);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e));
    serde_saphyr::from_str(&content).unwrap_or_else(|e| panic!("cannot parse {:?}: {}", path, e))
}

// ─── Validation cases ───────────────────────────────────────────────────────

/// One rule set run against one document.
///
/// Exactly one of `expected` (the `errors` map of the report) or `error` (a
/// substring of the configuration error) is set.
#[derive(Debug, serde::Deserialize)]
pub struct ValidationCase {
    pub id: String,
    pub name: String,
    pub rules: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub messages: Option<MessageCatalog>,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Runs a case and describes the mismatch, if any.
pub fn check_validation_case(case: &ValidationCase) -> Result<(), String> {
    let rules = RuleSet::from_value(&case.rules).map_err(|e| format!("rule set: {}", e))?;

    let mut validator = Validator::new();
    if let Some(catalog) = &case.messages {
        validator.load_messages(catalog);
    }

    match (validator.validate(&case.data, &rules), &case.error, &case.expected) {
        (Err(e), Some(wanted), _) if e.to_string().contains(wanted.as_str()) => Ok(()),
        (Err(e), _, _) => Err(format!("unexpected config error: {}", e)),
        (Ok(_), Some(wanted), _) => Err(format!("expected config error containing {:?}", wanted)),
        (Ok(_), None, expected) => {
            let expected = expected.clone().unwrap_or_else(|| serde_json::json!({}));
            let actual = validator.report().to_value()["errors"].clone();
            if actual == expected {
                Ok(())
            } else {
                Err(format!("expected {}, got {}", expected, actual))
            }
        }
    }
}

pub fn run_validation_suite(relative: &str) {
    let cases: Vec<ValidationCase> = load_cases(relative);
    assert!(!cases.is_empty(), "{} has no cases", relative);

    let mut failed = 0;
    for case in &cases {
        if let Err(reason) = check_validation_case(case) {
            eprintln!("  FAIL [{}] {}: {}", case.id, case.name, reason);
            failed += 1;
        }
    }

    eprintln!(
        "\n{}: {} passed, {} failed out of {} total",
        relative,
        cases.len() - failed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} {} cases failed", failed, relative);
}
