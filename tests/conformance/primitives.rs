use dotrules::overlap::{correlate, merge, overlap};
use dotrules::pattern::Pattern;
use dotrules::primitives::resolve;
use serde_json::Value;

use super::common::load_cases;

// ─── resolve ─────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ResolveCase {
    name: String,
    id: String,
    input: ResolveInput,
    expected: Vec<ResolvedPair>,
}

#[derive(Debug, serde::Deserialize)]
struct ResolveInput {
    pattern: String,
    data: Value,
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct ResolvedPair {
    attribute: String,
    value: Value,
}

#[test]
fn resolve_suite() {
    let cases: Vec<ResolveCase> = load_cases("primitives/resolve.yaml");

    let mut failed = 0;
    for case in &cases {
        let actual: Vec<ResolvedPair> = resolve(&case.input.data, &case.input.pattern)
            .map(|(attribute, value)| ResolvedPair {
                attribute,
                value: value.clone(),
            })
            .collect();

        if actual != case.expected {
            eprintln!(
                "  FAIL [{}] {}: expected {:?}, got {:?}",
                case.id, case.name, case.expected, actual
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nresolve: {} passed, {} failed out of {} total",
        cases.len() - failed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} resolve tests failed", failed);
}

// ─── overlap / merge / correlate ─────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct OverlapCase {
    name: String,
    id: String,
    input: OverlapInput,
    /// Shared prefix, or null when the patterns do not overlap.
    expected: Option<String>,
    /// Field instance for `input.attribute`, when the case exercises merge.
    #[serde(default)]
    merged: Option<String>,
    /// Whether `correlate(a, b)` accepts the pair.
    correlated: bool,
}

#[derive(Debug, serde::Deserialize)]
struct OverlapInput {
    a: String,
    b: String,
    #[serde(default)]
    attribute: Option<String>,
}

#[test]
fn overlap_suite() {
    let cases: Vec<OverlapCase> = load_cases("primitives/overlap.yaml");

    let mut failed = 0;
    for case in &cases {
        let a = Pattern::parse(&case.input.a);
        let b = Pattern::parse(&case.input.b);
        let shared = overlap(&a, &b);
        let mut problems = Vec::new();

        if shared.as_ref().map(Pattern::to_string) != case.expected {
            problems.push(format!("overlap {:?}", shared.map(|p| p.to_string())));
        }
        if let (Some(attribute), Some(wanted), Some(shared)) =
            (&case.input.attribute, &case.merged, overlap(&a, &b))
        {
            let merged = merge(&shared, attribute, &b);
            if &merged != wanted {
                problems.push(format!("merged {:?}", merged));
            }
        }
        if correlate(&case.input.a, &case.input.b).is_ok() != case.correlated {
            problems.push(format!("correlated {}", !case.correlated));
        }

        if !problems.is_empty() {
            eprintln!("  FAIL [{}] {}: {}", case.id, case.name, problems.join(", "));
            failed += 1;
        }
    }

    eprintln!(
        "\noverlap: {} passed, {} failed out of {} total",
        cases.len() - failed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} overlap tests failed", failed);
}
