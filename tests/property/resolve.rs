use dotrules::primitives::{has, lookup, resolve, resolve_single};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z]{1,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 1..4).prop_map(|pairs| {
                let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                Value::Object(map)
            }),
        ]
    })
}

/// Patterns over the key alphabet of [`arb_json`], with wildcards mixed in.
fn arb_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-c]", Just("*".to_string()), "[0-2]"], 1..4)
        .prop_map(|segments| segments.join("."))
}

/// Every concrete attribute reachable by `segments`, computed by brute force:
/// wildcards try every index up to the container size.
fn expand(value: &Value, segments: &[&str], prefix: Vec<String>, out: &mut Vec<String>) {
    let Some((head, rest)) = segments.split_first() else {
        out.push(prefix.join("."));
        return;
    };

    let candidates: Vec<String> = match (*head, value) {
        ("*", Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
        ("*", Value::Object(map)) => map
            .keys()
            .filter(|k| k.parse::<i64>().is_ok_and(|i| i.to_string() == **k))
            .cloned()
            .collect(),
        ("*", _) => Vec::new(),
        (key, _) => vec![key.to_string()],
    };

    for key in candidates {
        let child = match value {
            Value::Object(map) => map.get(&key),
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == key)
                .and_then(|i| items.get(i)),
            _ => None,
        };
        if let Some(child) = child {
            let mut path = prefix.clone();
            path.push(key);
            expand(child, rest, path, out);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn literal_pattern_resolves_to_itself(value in arb_json(3), pattern in "[a-c](\\.[a-c0-2]){0,3}") {
        let matches: Vec<_> = resolve(&value, &pattern).collect();
        prop_assert!(matches.len() <= 1);
        if let Some((attribute, found)) = matches.first() {
            prop_assert_eq!(attribute, &pattern);
            prop_assert_eq!(Some(*found), lookup(&value, &pattern));
        }
    }

    #[test]
    fn wildcard_expansion_has_no_phantom_indices(value in arb_json(3), pattern in arb_pattern()) {
        let segments: Vec<&str> = pattern.split('.').collect();
        let mut expected = Vec::new();
        expand(&value, &segments, Vec::new(), &mut expected);

        let actual: Vec<String> = resolve(&value, &pattern).map(|(a, _)| a).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn resolved_attributes_address_their_values(value in arb_json(3), pattern in arb_pattern()) {
        for (attribute, found) in resolve(&value, &pattern) {
            prop_assert!(!attribute.contains('*'));
            prop_assert_eq!(lookup(&value, &attribute), Some(found));
        }
    }

    #[test]
    fn has_and_resolve_single_agree_with_resolve(value in arb_json(3), pattern in arb_pattern()) {
        let first = resolve(&value, &pattern).next().map(|(_, v)| v);
        prop_assert_eq!(has(&value, &pattern), first.is_some());
        prop_assert_eq!(resolve_single(&value, &pattern), first);
    }

    #[test]
    fn resolve_never_panics(value in arb_json(3), pattern in "[a-c*.0-9]{0,12}") {
        let _ = resolve(&value, &pattern).count();
    }
}
