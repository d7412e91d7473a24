use dotrules::overlap::{correlate, merge, overlap};
use dotrules::pattern::Pattern;
use dotrules::primitives::resolve;
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-d]",
        1 => Just("*".to_string()),
    ]
}

fn arb_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|s| s.join("."))
}

/// Rows of optional `x` / `y` leaves, each holding a list of tagged items.
fn arb_rows() -> impl Strategy<Value = Value> {
    let item = prop_oneof![Just(None), (0i64..100).prop_map(Some)];
    let row = (
        prop::option::of(0i64..100),
        prop::option::of(0i64..100),
        prop::collection::vec(item, 0..3),
    )
        .prop_map(|(x, y, items)| {
            let mut map = serde_json::Map::new();
            if let Some(x) = x {
                map.insert("x".into(), json!(x));
            }
            if let Some(y) = y {
                map.insert("y".into(), json!(y));
            }
            let items: Vec<Value> = items
                .into_iter()
                .map(|v| match v {
                    Some(v) => json!({ "v": v }),
                    None => json!({}),
                })
                .collect();
            map.insert("items".into(), Value::Array(items));
            Value::Object(map)
        });
    prop::collection::vec(row, 0..5).prop_map(|rows| json!({ "rows": rows }))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn overlap_is_symmetric(a in arb_pattern(), b in arb_pattern()) {
        let (pa, pb) = (Pattern::parse(&a), Pattern::parse(&b));
        prop_assert_eq!(overlap(&pa, &pb), overlap(&pb, &pa));
    }

    #[test]
    fn overlap_with_itself_is_the_pattern(a in arb_pattern()) {
        let p = Pattern::parse(&a);
        prop_assert_eq!(overlap(&p, &p), Some(p.clone()));
    }

    #[test]
    fn overlap_is_a_prefix_of_both(a in arb_pattern(), b in arb_pattern()) {
        let (pa, pb) = (Pattern::parse(&a), Pattern::parse(&b));
        if let Some(shared) = overlap(&pa, &pb) {
            prop_assert_eq!(pa.prefix(shared.len()), shared.clone());
            prop_assert_eq!(pb.prefix(shared.len()), shared);
        }
    }

    #[test]
    fn literal_fields_always_correlate(a in arb_pattern(), b in "[a-d](\\.[a-d]){0,3}") {
        prop_assert!(correlate(&a, &b).is_ok());
    }

    #[test]
    fn merge_matches_the_resolved_sibling(data in arb_rows()) {
        let a = Pattern::parse("rows.*.x");
        let b = Pattern::parse("rows.*.y");
        let shared = overlap(&a, &b).expect("rows.* is shared");

        let siblings: Vec<String> = resolve(&data, "rows.*.y").map(|(attr, _)| attr).collect();
        for (attribute, _) in resolve(&data, "rows.*.x") {
            let merged = merge(&shared, &attribute, &b);
            let index = attribute.split('.').nth(1);
            prop_assert_eq!(merged.split('.').nth(1), index);
            prop_assert!(merged.ends_with(".y"));

            let row_has_y = data["rows"][index.unwrap().parse::<usize>().unwrap()].get("y").is_some();
            prop_assert_eq!(siblings.contains(&merged), row_has_y);
        }
    }

    #[test]
    fn merge_keeps_unshared_wildcards(data in arb_rows()) {
        let a = Pattern::parse("rows.*.x");
        let b = Pattern::parse("rows.*.items.*.v");
        let shared = overlap(&a, &b).expect("rows.* is shared");

        for (attribute, _) in resolve(&data, "rows.*.x") {
            let merged = merge(&shared, &attribute, &b);
            let row = attribute.split('.').nth(1).unwrap();
            prop_assert_eq!(merged, format!("rows.{}.items.*.v", row));
        }
    }
}
