#![no_main]

use dotrules::{RuleSet, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split between the YAML rule set and the JSON document.
    let split = data[0] as usize % data.len().max(1);
    let (rules_bytes, value_bytes) = data.split_at(split.min(data.len()));

    let Ok(rules_text) = std::str::from_utf8(rules_bytes) else {
        return;
    };
    let Ok(rules) = RuleSet::from_yaml(rules_text) else {
        return;
    };

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(value_bytes) {
        let mut validator = Validator::new();
        if validator.validate(&value, &rules).is_ok() {
            let _ = validator.report();
        }
    }
});
