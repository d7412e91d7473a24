use dotrules::{RuleSet, Validator};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_name() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        "[A-Za-z]{1,8}".prop_map(Value::String),
        "[a-z0-9]{1,8}".prop_map(Value::String),
    ]
}

fn arb_users() -> impl Strategy<Value = Value> {
    prop::collection::vec(
        (arb_name(), prop::option::of(0i64..200)).prop_map(|(name, age)| {
            let mut user = serde_json::Map::new();
            user.insert("name".into(), name);
            if let Some(age) = age {
                user.insert("age".into(), json!(age));
            }
            Value::Object(user)
        }),
        0..6,
    )
    .prop_map(|users| json!({ "user": users }))
}

fn rules() -> RuleSet {
    RuleSet::new()
        .rule("user.*.name", "required|alpha|max-str-len:6")
        .rule("user.*.age", "min:18|max:120")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn validation_after_reset_is_idempotent(data in arb_users()) {
        let rules = rules();
        let mut validator = Validator::new();

        let first = validator.validate(&data, &rules).unwrap();
        let report = validator.report();
        validator.reset();
        let second = validator.validate(&data, &rules).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(report, validator.report());
    }

    #[test]
    fn validate_reports_whether_errors_were_added(data in arb_users()) {
        let mut validator = Validator::new();
        let failed = validator.validate(&data, &rules()).unwrap();
        prop_assert_eq!(failed, validator.has_errors());
        prop_assert_eq!(failed, !validator.report().is_empty());
    }

    #[test]
    fn errors_accumulate_without_reset(data in arb_users()) {
        let rules = rules();
        let mut validator = Validator::new();
        validator.validate(&data, &rules).unwrap();
        let once = validator.errors().len();
        validator.validate(&data, &rules).unwrap();
        prop_assert_eq!(validator.errors().len(), once * 2);
    }

    #[test]
    fn every_error_names_a_concrete_user_or_the_pattern(data in arb_users()) {
        let mut validator = Validator::new();
        validator.validate(&data, &rules()).unwrap();
        let users = data["user"].as_array().map_or(0, Vec::len);

        for record in validator.errors() {
            let segments: Vec<&str> = record.attribute.split('.').collect();
            prop_assert_eq!(segments[0], "user");
            if segments[1] != "*" {
                let index: usize = segments[1].parse().unwrap();
                prop_assert!(index < users);
            }
        }
    }
}
